//! Report builder: uploaded alarm spreadsheet in, aggregate metrics out.
//!
//! The pipeline is a pure function of the workbook bytes and the current
//! filter selection:
//!
//! ```ignore
//! let dataset = report::load(&bytes)?;
//! let metrics = report::build_report(&dataset, &ReportOptions::for_view(ReportView::Tickets, None));
//! ```
//!
//! Rows whose recovery time is missing or negative are dropped during
//! [`load`] and never reach an aggregate.

mod columns;
mod dataset;
mod event;
mod load;
mod metrics;
mod options;
mod timestamp;

pub use columns::{
    ColumnMap, ALARM_TIME_COLUMN, CENTER_COLUMN, NORMALIZATION_TIME_COLUMN, TICKET_COLUMN,
};
pub use dataset::Dataset;
pub use event::{ticket_is_registered, AlarmEvent, DerivedEvent};
pub use load::{dataset_from_range, load, load_with, LoadError};
pub use metrics::{summarize, BandCounts, CenterCount, DailyCount, Metrics, RecoveryBand};
pub use options::{build_report, ReportOptions, ReportView};
pub use timestamp::parse_timestamp;
