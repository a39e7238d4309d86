//! ROI cards leading the ROI dashboard.

use crate::components::{KpiCard, SectionHeader};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::cards::roi_cards;
use moveo_data::dataset;
use moveo_data::kpi::{ia_share_pct, ExecutiveKpis};

#[derive(Props, Clone, PartialEq)]
pub struct RoiSummaryProps {
    #[props(default = 4)]
    pub columns: usize,
}

/// Monetary savings, agents freed and the IA share of the volume.
#[component]
pub fn RoiSummary(props: RoiSummaryProps) -> Element {
    let Some(kpis) = ExecutiveKpis::current() else {
        return rsx! {};
    };
    let cards = roi_cards(
        &dataset::ROI_FIGURES,
        &kpis,
        ia_share_pct(dataset::VOLUME_IA_VS_HUMAN),
    );
    let grid = theme::grid_style(props.columns, 14);

    rsx! {
        section {
            style: theme::SECTION_CARD,
            SectionHeader {
                title: "Retorno sobre o investimento",
                description: "Economia estimada e capacidade liberada pela automação",
            }
            div {
                style: "{grid}",
                for card in cards {
                    KpiCard {
                        key: "{card.label}",
                        card: card.clone(),
                        tint: "rgba(125, 208, 255, 0.06)",
                    }
                }
            }
        }
    }
}
