//! IA vs human volume as adjacent bars.

use super::tooltip_bubble::{BarHover, TooltipBubble};
use super::{EmptyChart, Legend, LegendEntry};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::bars::{paired_bars, BAR_PLOT_HEIGHT, BAR_ROW_HEIGHT};
use moveo_chart::palette;
use moveo_chart::tooltip::{MarkerId, TooltipState, BAR_INSETS};
use moveo_data::models::DualPoint;
use moveo_utils::format::format_number;

#[derive(Props, Clone, PartialEq)]
pub struct DualBarChartProps {
    pub id: String,
    pub data: Vec<DualPoint>,
    #[props(default = "IA".to_string())]
    pub primary_label: String,
    #[props(default = "Humano".to_string())]
    pub secondary_label: String,
}

/// Two bars per month sharing one maximum across both series.
#[component]
pub fn DualBarChart(props: DualBarChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let pairs = match paired_bars(&props.data, BAR_PLOT_HEIGHT) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let legend = vec![
        LegendEntry::new(props.primary_label.clone(), palette::ACCENT),
        LegendEntry::new(props.secondary_label.clone(), palette::ACCENT_2),
    ];

    let columns = pairs.iter().enumerate().map(|(i, pair)| {
        let bars = [
            (0, pair.ia, &props.primary_label, palette::ACCENT),
            (1, pair.human, &props.secondary_label, palette::ACCENT_2),
        ];
        let segments = bars.into_iter().map(|(series, bar, name, color)| {
            let hover = BarHover {
                container: props.id.clone(),
                anchor: MarkerId::new(series, i),
                insets: BAR_INSETS,
                label: format!("{} • {}", pair.month, name),
                value: format_number(bar.value),
            };
            let leave = hover.clone();
            let bar_style = theme::bar_style(color, bar.height, 28);
            rsx! {
                div {
                    key: "{series}",
                    style: "{bar_style}",
                    onmouseenter: move |evt: MouseEvent| hover.enter(tooltip, &evt),
                    onmouseleave: move |_| leave.leave(tooltip),
                }
            }
        });
        rsx! {
            div {
                key: "{pair.month}",
                style: theme::BAR_COLUMN,
                div {
                    style: "display: flex; gap: 4px; align-items: flex-end; height: {BAR_ROW_HEIGHT}px;",
                    {segments}
                }
                span { style: theme::BAR_LABEL, "{pair.month}" }
            }
        }
    });

    let active = tooltip.read().active().cloned();

    rsx! {
        div {
            Legend { entries: legend }
            div {
                id: "{props.id}",
                style: theme::BAR_GROUP,
                {columns}
                if let Some(tip) = active {
                    TooltipBubble { tooltip: tip }
                }
            }
        }
    }
}
