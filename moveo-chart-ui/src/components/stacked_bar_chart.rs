//! IA vs human volume as stacked columns.

use super::tooltip_bubble::{BarHover, TooltipBubble};
use super::{EmptyChart, Legend, LegendEntry};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::bars::{stacked_bars, BAR_PLOT_HEIGHT, BAR_ROW_HEIGHT};
use moveo_chart::palette;
use moveo_chart::tooltip::{MarkerId, TooltipState, STACKED_INSETS};
use moveo_data::models::DualPoint;
use moveo_utils::format::format_number;

#[derive(Props, Clone, PartialEq)]
pub struct StackedBarChartProps {
    pub id: String,
    pub data: Vec<DualPoint>,
}

/// Human segment over the IA segment, one column per month.
///
/// Only the human segment has a hover tooltip; the IA segment carries a
/// native `title`.
#[component]
pub fn StackedBarChart(props: StackedBarChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let stacks = match stacked_bars(&props.data, BAR_PLOT_HEIGHT) {
        Ok(stacks) => stacks,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let legend = vec![
        LegendEntry::new("IA", palette::ACCENT),
        LegendEntry::new("Humano", palette::ACCENT_2),
    ];

    let columns = stacks.iter().enumerate().map(|(i, stack)| {
        let hover = BarHover {
            container: props.id.clone(),
            anchor: MarkerId::new(1, i),
            insets: STACKED_INSETS,
            label: format!("{} • Humano", stack.month),
            value: format_number(stack.human.value),
        };
        let leave = hover.clone();
        let human_style = theme::bar_style(palette::ACCENT_2, stack.human.height, 32);
        let ia_style = theme::bar_style(palette::ACCENT, stack.ia.height, 32);
        let ia_title = format!("IA: {}", format_number(stack.ia.value));
        rsx! {
            div {
                key: "{stack.month}",
                style: theme::BAR_COLUMN,
                div {
                    style: "display: flex; flex-direction: column; justify-content: flex-end; height: {BAR_ROW_HEIGHT}px;",
                    div {
                        style: "{human_style}",
                        onmouseenter: move |evt: MouseEvent| hover.enter(tooltip, &evt),
                        onmouseleave: move |_| leave.leave(tooltip),
                    }
                    div {
                        style: "{ia_style}",
                        title: "{ia_title}",
                    }
                }
                span { style: theme::BAR_LABEL, "{stack.month}" }
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
