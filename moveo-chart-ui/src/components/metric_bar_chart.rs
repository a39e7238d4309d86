//! Single-series bar rendering of a monthly metric.

use super::tooltip_bubble::{BarHover, TooltipBubble};
use super::EmptyChart;
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::bars::{single_bars, BAR_PLOT_HEIGHT, BAR_ROW_HEIGHT};
use moveo_chart::palette;
use moveo_chart::tooltip::{MarkerId, TooltipState, BAR_INSETS};
use moveo_data::models::MonthPoint;
use moveo_utils::format::ValueFormat;

#[derive(Props, Clone, PartialEq)]
pub struct MetricBarChartProps {
    /// DOM id of the bar row; tooltips are placed relative to it
    pub id: String,
    pub points: Vec<MonthPoint>,
    #[props(default = palette::ACCENT.to_string())]
    pub color: String,
    #[props(default = ValueFormat::Percent)]
    pub format: ValueFormat,
}

/// One bar per month, the tallest filling the plot height.
#[component]
pub fn MetricBarChart(props: MetricBarChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let bars = match single_bars(&props.points, BAR_PLOT_HEIGHT) {
        Ok(bars) => bars,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let columns = bars.iter().enumerate().map(|(i, b)| {
        let hover = BarHover {
            container: props.id.clone(),
            anchor: MarkerId::new(0, i),
            insets: BAR_INSETS,
            label: b.month.to_string(),
            value: props.format.apply(b.bar.value),
        };
        let leave = hover.clone();
        let bar_style = theme::bar_style(&props.color, b.bar.height, 36);
        rsx! {
            div {
                key: "{b.month}",
                style: theme::BAR_COLUMN,
                div {
                    style: "display: flex; align-items: flex-end; height: {BAR_ROW_HEIGHT}px;",
                    div {
                        style: "{bar_style}",
                        onmouseenter: move |evt: MouseEvent| hover.enter(tooltip, &evt),
                        onmouseleave: move |_| leave.leave(tooltip),
                    }
                }
                span { style: theme::BAR_LABEL, "{b.month}" }
            }
        }
    });

    let active = tooltip.read().active().cloned();

    rsx! {
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
