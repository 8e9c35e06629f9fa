use dioxus::prelude::*;

use crate::{dashboard::DashboardState, report::ReportView, t};

#[component]
pub fn ReportTabs(state: Signal<DashboardState>) -> Element {
    let active = state.read().view;
    let tabs = [
        (ReportView::Alarms, t!("tab-alarms")),
        (ReportView::Tickets, t!("tab-tickets")),
    ];

    rsx! {
        div { class: "report-tabs", role: "tablist",
            for (view, label) in tabs.into_iter() {
                {render_tab(state, view, label, view == active)}
            }
        }
    }
}

fn render_tab(
    mut state: Signal<DashboardState>,
    view: ReportView,
    label: String,
    is_active: bool,
) -> Element {
    rsx! {
        button {
            key: "{view.slug()}",
            r#type: "button",
            role: "tab",
            aria_selected: "{is_active}",
            class: format!(
                "report-tabs__tab {}",
                if is_active { "report-tabs__tab--active" } else { "" }
            ),
            onclick: move |_| state.with_mut(|s| s.select_view(view)),
            "{label}"
        }
    }
}

/// Center picker. Empty value means every center.
#[component]
pub fn CenterFilter(state: Signal<DashboardState>, center_column: String) -> Element {
    let mut state = state;
    let snapshot = state.read();
    let Some(dataset) = snapshot.dataset.as_ref() else {
        return rsx! {};
    };

    if !dataset.has_center_column() {
        return rsx! {
            p { class: "report-filter__notice",
                {t!("filter-center-missing", column = center_column.clone())}
            }
        };
    }

    let centers = dataset.centers();
    let selected = snapshot.center.clone().unwrap_or_default();
    drop(snapshot);

    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        state.with_mut(|s| s.select_center(&value));
    };

    rsx! {
        div { class: "report-filter",
            label { class: "report-filter__label", r#for: "center-select",
                {t!("filter-center-label")}
            }
            select {
                id: "center-select",
                class: "report-filter__select",
                value: "{selected}",
                onchange: on_change,
                option { value: "", {t!("filter-all-centers")} }
                for center in centers.into_iter() {
                    option {
                        key: "{center}",
                        value: "{center}",
                        selected: center == selected,
                        "{center}"
                    }
                }
            }
        }
    }
}
