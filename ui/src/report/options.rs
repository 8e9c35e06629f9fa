//! The single report pipeline behind both dashboard tabs.

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::metrics::Metrics;

/// Which dashboard tab is being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// Every valid alarm row.
    #[default]
    Alarms,
    /// Only rows with a registered incident (RAL) ticket.
    Tickets,
}

impl ReportView {
    pub fn slug(self) -> &'static str {
        match self {
            ReportView::Alarms => "alarms",
            ReportView::Tickets => "tickets",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub require_ticket_digit: bool,
    pub center: Option<String>,
}

impl ReportOptions {
    pub fn for_view(view: ReportView, center: Option<String>) -> Self {
        Self {
            require_ticket_digit: view == ReportView::Tickets,
            center,
        }
    }
}

/// Filter by center, optionally keep ticketed rows, then summarize.
pub fn build_report(dataset: &Dataset, options: &ReportOptions) -> Metrics {
    let filtered = dataset.filter_by_center(options.center.as_deref());
    if options.require_ticket_digit {
        filtered.ticketed_subset().summarize()
    } else {
        filtered.summarize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::event::AlarmEvent;
    use time::macros::datetime;

    fn row(center: &str, ticket: &str, minutes: i64) -> AlarmEvent {
        let alarm = datetime!(2024-02-10 08:00:00);
        AlarmEvent {
            center: Some(center.to_string()),
            ticket_id: ticket.to_string(),
            alarm_time: Some(alarm),
            normalization_time: Some(alarm + time::Duration::minutes(minutes)),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_events(
            vec![
                row("North", "RAL 1", 4),
                row("North", "", 9),
                row("South", "N/A", 14),
                row("South", "77", 40),
            ],
            true,
        )
    }

    #[test]
    fn alarm_view_counts_every_row() {
        let metrics = build_report(&dataset(), &ReportOptions::for_view(ReportView::Alarms, None));
        assert_eq!(metrics.count, 4);
    }

    #[test]
    fn ticket_view_keeps_registered_rows() {
        let metrics = build_report(&dataset(), &ReportOptions::for_view(ReportView::Tickets, None));
        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.min_minutes, Some(4.0));
        assert_eq!(metrics.max_minutes, Some(40.0));
    }

    #[test]
    fn center_and_ticket_filters_compose() {
        let options = ReportOptions::for_view(ReportView::Tickets, Some("South".into()));
        let metrics = build_report(&dataset(), &options);
        assert_eq!(metrics.count, 1);
        assert_eq!(metrics.per_center[0].center, "South");
    }

    #[test]
    fn unknown_center_yields_empty_metrics() {
        let options = ReportOptions::for_view(ReportView::Alarms, Some("West".into()));
        let metrics = build_report(&dataset(), &options);
        assert!(metrics.is_empty());
        assert_eq!(metrics.mean_minutes, None);
    }
}
