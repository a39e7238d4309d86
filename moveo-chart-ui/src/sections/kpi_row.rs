//! The four headline KPI cards.

use crate::components::KpiCard;
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::cards::executive_cards;
use moveo_data::dataset;
use moveo_data::kpi::ExecutiveKpis;

#[derive(Props, Clone, PartialEq)]
pub struct KpiRowProps {
    #[props(default = 4)]
    pub columns: usize,
}

#[component]
pub fn KpiRow(props: KpiRowProps) -> Element {
    let Some(kpis) = ExecutiveKpis::current() else {
        return rsx! {};
    };
    let since = dataset::CONTAINMENT.first().map(|p| p.month).unwrap_or_default();
    let cards = executive_cards(&kpis, since);
    let grid = format!("{} margin-bottom: 20px;", theme::grid_style(props.columns, 14));

    rsx! {
        section {
            style: "{grid}",
            for card in cards {
                KpiCard { key: "{card.label}", card: card.clone() }
            }
        }
    }
}
