//! Line/area chart drawn as inline SVG.

use super::tooltip_bubble::{self, TooltipBubble};
use super::EmptyChart;
use dioxus::prelude::*;
use moveo_chart::line::LineAreaLayout;
use moveo_chart::palette;
use moveo_chart::scale::LINE_FRAME;
use moveo_chart::tooltip::{percent_position, MarkerId, Tooltip, TooltipState};
use moveo_data::models::MonthPoint;
use moveo_utils::format::ValueFormat;

/// Props for LineAreaChart
#[derive(Props, Clone, PartialEq)]
pub struct LineAreaChartProps {
    /// DOM id of the chart; also scopes the gradient id
    pub id: String,
    pub points: Vec<MonthPoint>,
    #[props(default = palette::ACCENT.to_string())]
    pub color: String,
    /// Dashed overlay drawn on the same scale
    #[props(default)]
    pub secondary: Option<Vec<MonthPoint>>,
    #[props(default = ValueFormat::Percent)]
    pub format: ValueFormat,
    /// SVG viewBox height in pixels
    #[props(default = LINE_FRAME.height)]
    pub height: f64,
}

/// Gradient area, stroke and hover markers for one monthly series.
///
/// Tooltips are placed at the marker as a percentage of the SVG box, so they
/// follow the chart when it is resized.
#[component]
pub fn LineAreaChart(props: LineAreaChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let frame = LINE_FRAME.with_height(props.height);
    let layout = match LineAreaLayout::compute(frame, &props.points, props.secondary.as_deref()) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let gradient_id = format!("{}-area", props.id);
    let color = props.color.clone();
    let format = props.format;
    let area_opacity = palette::AREA_OPACITY;

    let markers = layout
        .primary
        .points
        .iter()
        .zip(props.points.iter())
        .enumerate()
        .map(|(i, (point, source))| {
            let point = *point;
            let anchor = MarkerId::new(0, i);
            let tip = Tooltip {
                anchor,
                position: percent_position(point, &frame),
                label: source.month.to_string(),
                value: format.apply(source.value),
            };
            rsx! {
                circle {
                    key: "{i}",
                    cx: "{point.x}",
                    cy: "{point.y}",
                    r: "5",
                    fill: "{color}",
                    stroke: palette::PANEL,
                    stroke_width: "2",
                    style: "cursor: pointer;",
                    onmouseenter: move |_| tooltip_bubble::show(tooltip, tip.clone()),
                    onmouseleave: move |_| tooltip_bubble::hide(tooltip, anchor),
                }
            }
        });

    let labels = layout.primary.labels.iter().enumerate().map(|(i, label)| {
        rsx! {
            text {
                key: "{i}",
                x: "{label.x}",
                y: "{label.y}",
                fill: palette::MUTED,
                font_size: "11",
                text_anchor: "middle",
                "{label.text}"
            }
        }
    });

    let active = tooltip.read().active().cloned();

    rsx! {
        div {
            id: "{props.id}",
            style: "position: relative; width: 100%;",
            svg {
                view_box: "{frame.view_box()}",
                style: "display: block; width: 100%; height: auto;",
                defs {
                    linearGradient {
                        id: "{gradient_id}",
                        x1: "0%",
                        y1: "0%",
                        x2: "0%",
                        y2: "100%",
                        stop {
                            offset: "0%",
                            stop_color: "{color}",
                            stop_opacity: "{area_opacity}",
                        }
                        stop {
                            offset: "100%",
                            stop_color: "{color}",
                            stop_opacity: "0",
                        }
                    }
                }
                path {
                    d: "{layout.area_path}",
                    fill: "url(#{gradient_id})",
                    stroke: "none",
                }
                path {
                    d: "{layout.primary.path}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "3",
                    stroke_linecap: "round",
                }
                if let Some(secondary) = &layout.secondary {
                    path {
                        d: "{secondary.path}",
                        fill: "none",
                        stroke: palette::ACCENT_2,
                        stroke_width: "2.5",
                        stroke_dasharray: "6 6",
                    }
                }
                {markers}
                {labels}
            }
            if let Some(tip) = active {
                TooltipBubble { tooltip: tip }
            }
        }
    }
}
