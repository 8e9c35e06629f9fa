//! Timestamp parsing for the alarm / normalization columns.
//!
//! Text cells are accepted in exactly two layouts, tried in order:
//! `DD/MM/YYYY HH:MM:SS`, then `DD/MM/YYYY HH:MM` (seconds default to 0).
//! Native workbook date cells are converted from their serial value.

use calamine::{Data, ExcelDateTime};
use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

/// Parse a text timestamp. Returns `None` when neither layout matches.
pub fn parse_timestamp(text: &str) -> Option<PrimitiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    PrimitiveDateTime::parse(
        text,
        format_description!(
            "[day padding:none]/[month padding:none]/[year] [hour padding:none]:[minute]:[second]"
        ),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            text,
            format_description!("[day padding:none]/[month padding:none]/[year] [hour padding:none]:[minute]"),
        )
    })
    .ok()
}

/// Interpret a spreadsheet cell as a timestamp.
pub(crate) fn timestamp_from_cell(cell: &Data) -> Option<PrimitiveDateTime> {
    match cell {
        Data::String(text) => parse_timestamp(text),
        Data::DateTime(value) if value.is_datetime() => from_excel_datetime(value),
        Data::DateTimeIso(text) => parse_iso(text),
        _ => None,
    }
}

fn parse_iso(text: &str) -> Option<PrimitiveDateTime> {
    // Fractional seconds are dropped.
    let whole = text.trim().split('.').next().unwrap_or_default();
    PrimitiveDateTime::parse(
        whole,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
}

/// Workbook date cell to a naive timestamp. The serial is counted from the
/// workbook's own epoch (1900 or 1904 system).
fn from_excel_datetime(value: &ExcelDateTime) -> Option<PrimitiveDateTime> {
    let serial = value.as_f64();
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let naive = value.as_datetime()?;
    let utc = OffsetDateTime::from_unix_timestamp(naive.and_utc().timestamp()).ok()?;
    Some(PrimitiveDateTime::new(utc.date(), utc.time()))
}
