//! Section 4: efficiency by agent type.

use crate::components::{BrainSortSelector, BrainTable, SectionHeader};
use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;
use moveo_data::dataset;

/// Most used brains, sortable by any numeric column.
#[component]
pub fn BrainSection() -> Element {
    let state = use_context::<DashboardState>();
    let rows = state.filters().sorted_brains(dataset::BRAINS);

    rsx! {
        section {
            style: theme::SECTION_CARD,
            SectionHeader {
                title: "Seção 4 — Eficiência por tipo de agente",
                description: "Cérebros mais acionados (Jul-Nov)",
            }
            div {
                style: theme::NOTE,
                "Substituir pelos números da aba \"Dados separados por cérebro\" assim que disponível."
            }
            BrainSortSelector {}
            BrainTable { rows }
        }
    }
}
