//! Metric selector for the maturity section.

use super::PillButton;
use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;
use moveo_data::models::MetricKey;

/// Pill group swapping the metric shown in section 1.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let current = (state.metric)();

    rsx! {
        div {
            style: theme::FILTER,
            span { "Escolha a métrica" }
            div {
                style: theme::PILL_GROUP,
                for metric in MetricKey::ALL {
                    PillButton {
                        key: "{metric.key()}",
                        label: metric.button_label(),
                        active: current == metric,
                        onclick: move |_| state.metric.set(metric),
                    }
                }
            }
        }
    }
}
