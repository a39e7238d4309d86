//! Volume and AHT per comparison period.

use super::tooltip_bubble::{BarHover, TooltipBubble};
use super::{EmptyChart, Legend, LegendEntry};
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::bars::{period_bars, PERIOD_PLOT_HEIGHT, PERIOD_ROW_HEIGHT};
use moveo_chart::palette;
use moveo_chart::tooltip::{MarkerId, TooltipState, PERIOD_INSETS};
use moveo_data::models::PeriodSummary;
use moveo_utils::format::{format_decimal, format_number};

#[derive(Props, Clone, PartialEq)]
pub struct PeriodComparisonChartProps {
    pub id: String,
    pub periods: Vec<PeriodSummary>,
}

/// A wide volume bar and a narrow AHT bar per period, each measure against
/// its own maximum.
#[component]
pub fn PeriodComparisonChart(props: PeriodComparisonChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let groups = match period_bars(&props.periods, PERIOD_PLOT_HEIGHT) {
        Ok(groups) => groups,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let legend_colors = [palette::ACCENT, palette::ACCENT_2];
    let legend = props
        .periods
        .iter()
        .zip(legend_colors.iter().cycle())
        .map(|(p, color)| LegendEntry::new(p.label, *color))
        .collect::<Vec<_>>();

    let columns = groups.iter().enumerate().map(|(i, group)| {
        let volume = BarHover {
            container: props.id.clone(),
            anchor: MarkerId::new(0, i),
            insets: PERIOD_INSETS,
            label: format!("{} • Volumetria", group.label),
            value: format_number(group.volume.value),
        };
        let aht = BarHover {
            container: props.id.clone(),
            anchor: MarkerId::new(1, i),
            insets: PERIOD_INSETS,
            label: format!("{} • AHT", group.label),
            value: format!("{} min", format_decimal(group.aht.value, 1)),
        };
        let (volume_leave, aht_leave) = (volume.clone(), aht.clone());
        let volume_style = theme::bar_style(palette::ACCENT, group.volume.height, 32);
        let aht_style = theme::bar_style(palette::ACCENT_2, group.aht.height, 20);
        rsx! {
            div {
                key: "{group.label}",
                style: "display: flex; flex-direction: column; align-items: center; gap: 6px;",
                div {
                    style: "display: flex; gap: 6px; align-items: flex-end; height: {PERIOD_ROW_HEIGHT}px;",
                    div {
                        style: "{volume_style}",
                        onmouseenter: move |evt: MouseEvent| volume.enter(tooltip, &evt),
                        onmouseleave: move |_| volume_leave.leave(tooltip),
                    }
                    div {
                        style: "{aht_style}",
                        onmouseenter: move |evt: MouseEvent| aht.enter(tooltip, &evt),
                        onmouseleave: move |_| aht_leave.leave(tooltip),
                    }
                }
                span { style: theme::BAR_LABEL, "{group.label}" }
            }
        }
    });

    let group_style = format!("{} gap: 14px;", theme::BAR_GROUP);
    let active = tooltip.read().active().cloned();

    rsx! {
        div {
            Legend { entries: legend }
            div {
                id: "{props.id}",
                style: "{group_style}",
                {columns}
                if let Some(tip) = active {
                    TooltipBubble { tooltip: tip }
                }
            }
        }
    }
}
