//! Section 1: AI agent maturity.

use crate::components::{
    ChartModeToggle, DualBarChart, Legend, LegendEntry, LineAreaChart, MetricBarChart,
    MetricSelector, SectionHeader, StackedBarChart, StackedToggle,
};
use crate::state::DashboardState;
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::bars::VolumeLayout;
use moveo_chart::palette;
use moveo_chart::view_model::ChartMode;
use moveo_data::dataset;

#[derive(Props, Clone, PartialEq)]
pub struct MaturitySectionProps {
    #[props(default = 2)]
    pub columns: usize,
}

/// Selected autonomy metric over Jul-Nov, next to the IA vs human volume.
#[component]
pub fn MaturitySection(props: MaturitySectionProps) -> Element {
    let state = use_context::<DashboardState>();
    let filters = state.filters();
    let metric = filters.metric;
    let points = filters.metric_points();
    let volume = dataset::VOLUME_IA_VS_HUMAN.to_vec();
    let legend = vec![LegendEntry::new(metric.legend_label(), palette::ACCENT)];
    let grid = theme::grid_style(props.columns, 16);

    rsx! {
        section {
            style: theme::SECTION_CARD,
            SectionHeader {
                title: "Seção 1 — Maturidade do Agente de IA (Autonomia)",
                description: "Evolução mensal de Jul a Nov",
            }
            div {
                style: theme::FILTERS_ROW,
                MetricSelector {}
                ChartModeToggle {}
            }
            div {
                style: "{grid}",
                div {
                    style: theme::CHART_SHELL,
                    Legend { entries: legend }
                    if filters.chart_mode == ChartMode::Line {
                        LineAreaChart {
                            key: "{metric.key()}",
                            id: "metric-line-chart",
                            points: points.clone(),
                        }
                    } else {
                        MetricBarChart {
                            key: "{metric.key()}",
                            id: "metric-bar-chart",
                            points: points.clone(),
                        }
                    }
                }
                div {
                    style: theme::CHART_SHELL,
                    StackedToggle {}
                    if filters.volume_layout() == VolumeLayout::Stacked {
                        StackedBarChart { id: "volume-stacked-chart", data: volume.clone() }
                    } else {
                        DualBarChart {
                            id: "volume-paired-chart",
                            data: volume.clone(),
                            primary_label: "IA",
                            secondary_label: "Humano",
                        }
                    }
                }
            }
        }
    }
}
