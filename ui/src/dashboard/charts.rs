use dioxus::prelude::*;

use crate::{
    core::format,
    report::{BandCounts, CenterCount, DailyCount, ReportView},
    t,
};

/// Alarms per calendar day, oldest first.
#[component]
pub fn DailyChart(daily: Vec<DailyCount>) -> Element {
    let peak = daily.iter().map(|day| day.count).max().unwrap_or(0);
    let columns: Vec<(String, String, String)> = daily
        .iter()
        .map(|day| {
            (
                format::format_date(day.date),
                format::format_count(day.count),
                format!("height: {:.1}%", bar_percent(day.count, peak)),
            )
        })
        .collect();

    rsx! {
        section { class: "report-chart report-chart--daily",
            h3 { class: "report-chart__title", {t!("chart-daily-title")} }
            div { class: "report-chart__columns",
                for (date, count, fill_style) in columns.into_iter() {
                    div { key: "{date}", class: "report-chart__column", title: "{date}: {count}",
                        span { class: "report-chart__column-value", "{count}" }
                        div { class: "report-chart__column-track",
                            div { class: "report-chart__column-fill", style: "{fill_style}" }
                        }
                        span { class: "report-chart__column-label", "{date}" }
                    }
                }
            }
        }
    }
}

/// Share of rows per recovery band.
#[component]
pub fn BandChart(bands: BandCounts, view: ReportView) -> Element {
    let title = match view {
        ReportView::Alarms => t!("chart-bands-title"),
        ReportView::Tickets => t!("chart-bands-tickets-title"),
    };
    let total = bands.total();
    let peak = bands.iter().map(|(_, count)| count).max().unwrap_or(0);
    let rows: Vec<(usize, &'static str, String, String, String)> = bands
        .iter()
        .enumerate()
        .map(|(idx, (band, count))| {
            (
                idx,
                band.label(),
                format::format_count(count),
                format::format_share(count, total),
                format!("width: {:.1}%", bar_percent(count, peak)),
            )
        })
        .collect();

    rsx! {
        section { class: "report-chart report-chart--bands",
            h3 { class: "report-chart__title", "{title}" }
            ul { class: "report-chart__bars",
                for (idx, label, count, share, fill_style) in rows.into_iter() {
                    li { key: "{label}", class: "report-chart__bar",
                        span { class: "report-chart__bar-label", "{label}" }
                        div { class: "report-chart__bar-track",
                            div {
                                class: "report-chart__bar-fill report-chart__bar-fill--band{idx}",
                                style: "{fill_style}",
                            }
                        }
                        span { class: "report-chart__bar-value", "{count} · {share}" }
                    }
                }
            }
        }
    }
}

/// Row count per center, largest first. Scrolls when there are many centers.
#[component]
pub fn CenterChart(per_center: Vec<CenterCount>, view: ReportView) -> Element {
    let title = match view {
        ReportView::Alarms => t!("chart-centers-title"),
        ReportView::Tickets => t!("chart-centers-tickets-title"),
    };
    let peak = per_center.first().map(|entry| entry.count).unwrap_or(0);
    let rows: Vec<(String, String, String)> = per_center
        .iter()
        .map(|entry| {
            (
                entry.center.clone(),
                format::format_count(entry.count),
                format!("width: {:.1}%", bar_percent(entry.count, peak)),
            )
        })
        .collect();

    rsx! {
        section { class: "report-chart report-chart--centers",
            h3 { class: "report-chart__title", "{title}" }
            if rows.is_empty() {
                p { class: "report-card__placeholder", {t!("chart-centers-empty")} }
            } else {
                ul { class: "report-chart__bars report-chart__bars--scroll",
                    for (center, count, fill_style) in rows.into_iter() {
                        li { key: "{center}", class: "report-chart__bar",
                            span { class: "report-chart__bar-label", "{center}" }
                            div { class: "report-chart__bar-track",
                                div { class: "report-chart__bar-fill", style: "{fill_style}" }
                            }
                            span { class: "report-chart__bar-value", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

/// Bar length relative to the largest bar, in percent.
fn bar_percent(value: usize, peak: usize) -> f64 {
    if peak == 0 {
        0.0
    } else {
        value as f64 / peak as f64 * 100.0
    }
}
