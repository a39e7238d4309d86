//! Stacked/paired checkbox for the IA vs human chart.

use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn StackedToggle() -> Element {
    let mut state = use_context::<DashboardState>();
    let stacked = (state.stacked)();

    let on_change = move |_evt: Event<FormData>| {
        let next = !(state.stacked)();
        state.stacked.set(next);
    };

    rsx! {
        div {
            style: theme::FILTERS_ROW,
            label {
                style: "font-size: 12px; color: #93a7c0; display: flex; gap: 6px; align-items: center; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: stacked,
                    onchange: on_change,
                }
                "Barras empilhadas"
            }
        }
    }
}
