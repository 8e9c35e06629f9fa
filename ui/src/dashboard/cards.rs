use dioxus::prelude::*;

use crate::{
    core::format,
    report::{Metrics, ReportView},
    t,
};

#[derive(Clone, Debug)]
struct Card {
    kind: &'static str,
    label: String,
    value: String,
}

#[component]
pub fn SummaryCards(metrics: Metrics, view: ReportView) -> Element {
    let cards = build_cards(&metrics, view);

    rsx! {
        div { class: "report-cards",
            for card in cards.into_iter() {
                {render_card(card)}
            }
        }
    }
}

fn build_cards(metrics: &Metrics, view: ReportView) -> Vec<Card> {
    let count_label = match view {
        ReportView::Alarms => t!("card-rows"),
        ReportView::Tickets => t!("card-tickets"),
    };

    vec![
        Card {
            kind: "count",
            label: count_label,
            value: format::format_count(metrics.count),
        },
        Card {
            kind: "mean",
            label: t!("card-mean"),
            value: format::format_minutes(metrics.mean_minutes),
        },
        Card {
            kind: "max",
            label: t!("card-max"),
            value: format::format_minutes(metrics.max_minutes),
        },
        Card {
            kind: "min",
            label: t!("card-min"),
            value: format::format_minutes(metrics.min_minutes),
        },
    ]
}

fn render_card(card: Card) -> Element {
    let Card { kind, label, value } = card;
    let value_class = value_class(&value);

    rsx! {
        div { key: "{kind}", class: "report-card report-card--{kind}",
            span { class: "report-card__label", "{label}" }
            strong { class: "{value_class}", "{value}" }
        }
    }
}

/// Undefined statistics render as a dimmed dash, never as NaN or 0.
fn value_class(value: &str) -> &'static str {
    if value == format::PLACEHOLDER {
        "report-card__value report-card__value--placeholder"
    } else {
        "report-card__value"
    }
}
