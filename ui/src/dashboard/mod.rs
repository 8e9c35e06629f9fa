mod cards;
pub use cards::SummaryCards;

mod charts;
pub use charts::{BandChart, CenterChart, DailyChart};

mod filters;
pub use filters::{CenterFilter, ReportTabs};

mod upload;
pub use upload::UploadPanel;

mod export;
pub use export::ReportExportPanel;

use crate::report::{self, build_report, ColumnMap, Dataset, Metrics, ReportOptions, ReportView};

/// Per-session dashboard state. Rebuilt from scratch on every upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub file_name: Option<String>,
    pub dataset: Option<Dataset>,
    pub error: Option<String>,
    pub view: ReportView,
    pub center: Option<String>,
}

impl DashboardState {
    /// Replace the loaded data with `bytes`. The selected tab survives; the
    /// center selection does not, since the new sheet may not contain it.
    pub fn apply_upload(&mut self, file_name: String, bytes: &[u8], columns: &ColumnMap) {
        self.center = None;
        match report::load_with(bytes, columns) {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(file = %file_name, "upload rejected: {err}");
                self.dataset = None;
                self.error = Some(err.to_string());
            }
        }
        self.file_name = Some(file_name);
    }

    pub fn apply_read_failure(&mut self, file_name: String) {
        tracing::warn!(file = %file_name, "upload could not be read");
        self.center = None;
        self.dataset = None;
        self.error = Some(format!("could not read {file_name}"));
        self.file_name = Some(file_name);
    }

    pub fn select_view(&mut self, view: ReportView) {
        self.view = view;
    }

    /// An empty label clears the filter.
    pub fn select_center(&mut self, center: &str) {
        self.center = (!center.is_empty()).then(|| center.to_string());
    }

    pub fn options(&self) -> ReportOptions {
        ReportOptions::for_view(self.view, self.center.clone())
    }

    /// Metrics for the current tab and filter; `None` until a sheet loads.
    pub fn metrics(&self) -> Option<Metrics> {
        self.dataset
            .as_ref()
            .map(|dataset| build_report(dataset, &self.options()))
    }

    pub fn centers(&self) -> Vec<String> {
        self.dataset
            .as_ref()
            .map(Dataset::centers)
            .unwrap_or_default()
    }
}
