use dioxus::prelude::*;

use crate::{
    core::settings::Settings,
    dashboard::{
        BandChart, CenterChart, CenterFilter, DailyChart, DashboardState, ReportExportPanel,
        ReportTabs, SummaryCards, UploadPanel,
    },
    report::ReportView,
    t,
};

/// Upload a sheet, then switch between the alarm and ticket views.
#[component]
pub fn Report() -> Element {
    let settings = use_hook(Settings::load);
    let state = use_signal(DashboardState::default);

    let (metrics, view, center) = {
        let snapshot = state.read();
        (snapshot.metrics(), snapshot.view, snapshot.center.clone())
    };

    rsx! {
        section { class: "page page-report",
            h1 { {t!("report-title")} }
            p { {t!("report-intro")} }

            UploadPanel { state, columns: settings.columns.clone() }

            if let Some(metrics) = metrics {
                ReportTabs { state }
                CenterFilter { state, center_column: settings.columns.center.clone() }

                div { key: "{view.slug()}", class: "report-content fade-in",
                    SummaryCards { metrics: metrics.clone(), view }
                    if metrics.is_empty() {
                        p { class: "report-card__placeholder", {t!("report-empty-subset")} }
                    } else {
                        if view == ReportView::Alarms {
                            DailyChart { daily: metrics.daily.clone() }
                        }
                        div { class: "report-charts",
                            BandChart { bands: metrics.bands, view }
                            CenterChart { per_center: metrics.per_center.clone(), view }
                        }
                        ReportExportPanel { metrics: metrics.clone(), view, center: center.clone() }
                    }
                }
            }
        }
    }
}
