//! Section 2: Moveo vs the Zendesk period.

use crate::components::{KpiCard, PeriodComparisonChart, SectionHeader};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::cards::{csat_placeholder, transfer_card};
use moveo_data::dataset;
use moveo_data::kpi::ExecutiveKpis;

#[derive(Props, Clone, PartialEq)]
pub struct PeriodComparisonSectionProps {
    #[props(default = 2)]
    pub columns: usize,
}

/// Consolidated volume and AHT per period, with the CSAT and transfer cards.
#[component]
pub fn PeriodComparisonSection(props: PeriodComparisonSectionProps) -> Element {
    let periods = dataset::periods().to_vec();
    let transfer = ExecutiveKpis::current().map(|k| transfer_card(&k));
    let grid = theme::grid_style(props.columns, 16);
    let side_style = format!(
        "{} display: flex; flex-direction: column; gap: 12px; justify-content: center;",
        theme::CHART_SHELL
    );

    rsx! {
        section {
            style: theme::SECTION_CARD,
            SectionHeader {
                title: "Seção 2 — Moveo vs Período Zendesk",
                description: "Comparativo consolidado de volumetria e AHT humano",
            }
            div {
                style: "{grid}",
                div {
                    style: theme::CHART_SHELL,
                    PeriodComparisonChart { id: "period-comparison-chart", periods }
                }
                div {
                    style: "{side_style}",
                    KpiCard { card: csat_placeholder(), tint: "rgba(125, 208, 255, 0.08)" }
                    if let Some(card) = transfer {
                        KpiCard { card, tint: "rgba(158, 240, 201, 0.08)" }
                    }
                }
            }
        }
    }
}
