//! Section 3: operational efficiency.

use crate::components::{Legend, LegendEntry, LineAreaChart, SectionHeader, VolumeVsHeadcountChart};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::palette;
use moveo_data::dataset;
use moveo_utils::format::ValueFormat;

#[derive(Props, Clone, PartialEq)]
pub struct EfficiencySectionProps {
    #[props(default = 2)]
    pub columns: usize,
}

/// Headcount falling while volume holds.
#[component]
pub fn EfficiencySection(props: EfficiencySectionProps) -> Element {
    let headcount = dataset::HEADCOUNT_BY_MONTH.to_vec();
    let volume = dataset::TOTAL_VOLUMES.to_vec();
    let legend = vec![LegendEntry::new("Headcount humano (Jan-Nov)", palette::ACCENT_2)];
    let grid = theme::grid_style(props.columns, 16);

    rsx! {
        section {
            style: theme::SECTION_CARD,
            SectionHeader {
                title: "Seção 3 — Eficiência Operacional",
                description: "Headcount despencando, volume sustentado/crescente",
            }
            div {
                style: "{grid}",
                div {
                    style: theme::CHART_SHELL,
                    Legend { entries: legend }
                    LineAreaChart {
                        id: "headcount-line-chart",
                        points: headcount.clone(),
                        color: palette::ACCENT_2,
                        format: ValueFormat::Agents,
                    }
                }
                div {
                    style: theme::CHART_SHELL,
                    VolumeVsHeadcountChart {
                        id: "volume-headcount-chart",
                        volume: volume.clone(),
                        headcount: headcount.clone(),
                    }
                }
            }
        }
    }
}
