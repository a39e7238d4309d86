//! Sort column selector for the brain table.

use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;
use moveo_data::brains::BrainSortKey;

/// Dropdown choosing the column the brain table is sorted by.
///
/// Values go through `DashboardFilters::select_sort_key`, so a value that is
/// not a known column leaves the current order in place.
#[component]
pub fn BrainSortSelector() -> Element {
    let mut state = use_context::<DashboardState>();
    let current = (state.brain_sort)();

    let on_change = move |evt: Event<FormData>| {
        let mut filters = state.filters();
        if filters.select_sort_key(&evt.value()) {
            state.brain_sort.set(filters.brain_sort);
        }
    };

    rsx! {
        div {
            style: theme::FILTERS_ROW,
            label {
                r#for: "brain-sort-select",
                style: theme::FILTER,
                "Ordenar por"
                select {
                    id: "brain-sort-select",
                    style: "padding: 6px 10px; border-radius: 10px; background: #0f1c2e; color: #e6eef8; border: 1px solid rgba(147, 167, 192, 0.3);",
                    onchange: on_change,
                    for sort in BrainSortKey::ALL {
                        option {
                            key: "{sort.key()}",
                            value: "{sort.key()}",
                            selected: current == sort,
                            "{sort.label()}"
                        }
                    }
                }
            }
        }
    }
}
