//! Line/area vs bar rendering toggle.

use super::PillButton;
use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::view_model::ChartMode;

#[component]
pub fn ChartModeToggle() -> Element {
    let mut state = use_context::<DashboardState>();
    let current = (state.chart_mode)();

    rsx! {
        div {
            style: theme::FILTER,
            span { "Visualização" }
            div {
                style: theme::PILL_GROUP,
                for mode in ChartMode::ALL {
                    PillButton {
                        key: "{mode.label()}",
                        label: mode.label(),
                        active: current == mode,
                        onclick: move |_| state.chart_mode.set(mode),
                    }
                }
            }
        }
    }
}
