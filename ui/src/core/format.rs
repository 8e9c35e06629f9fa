//! Formatting helpers for presenting metrics.

use time::{macros::format_description, Date};

/// Shown in place of a statistic that is undefined (empty subset).
pub const PLACEHOLDER: &str = "—";

/// Whole count with `,` thousands separators, e.g. `12,345`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Minutes rounded to one decimal, or the placeholder when undefined.
pub fn format_minutes(value: Option<f64>) -> String {
    match value {
        Some(minutes) if minutes.is_finite() => format!("{minutes:.1}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// Whole-percent share of `part` in `total`.
pub fn format_share(part: usize, total: usize) -> String {
    if total == 0 {
        return PLACEHOLDER.to_string();
    }
    let pct = (part as f64 / total as f64 * 100.0).round() as u64;
    format!("{pct}%")
}
