//! Total volume against headcount on one canvas.

use super::tooltip_bubble::{self, TooltipBubble};
use super::{EmptyChart, Legend, LegendEntry};
use crate::dom;
use dioxus::prelude::*;
use moveo_chart::dual_scale::DualScaleLayout;
use moveo_chart::palette;
use moveo_chart::scale::{PlotFrame, PlotPoint, DUAL_SCALE_FRAME};
use moveo_chart::series::ScaledSeries;
use moveo_chart::tooltip::{MarkerId, Tooltip, TooltipState, BAR_INSETS};
use moveo_data::models::MonthPoint;
use moveo_utils::format::ValueFormat;

#[derive(Props, Clone, PartialEq)]
pub struct VolumeVsHeadcountChartProps {
    pub id: String,
    pub volume: Vec<MonthPoint>,
    pub headcount: Vec<MonthPoint>,
}

/// Volume area with a dashed headcount line.
///
/// The two series keep independent maxima and x steps: the chart shows
/// trends, not one value against the other.
#[component]
pub fn VolumeVsHeadcountChart(props: VolumeVsHeadcountChartProps) -> Element {
    let tooltip = use_signal(TooltipState::default);

    let frame = DUAL_SCALE_FRAME;
    let layout = match DualScaleLayout::compute(frame, &props.volume, &props.headcount) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("{}: {}", props.id, e);
            return rsx! { EmptyChart {} };
        }
    };

    let legend = vec![
        LegendEntry::new("Volumetria total", palette::VOLUME),
        LegendEntry::new("Headcount (linha tracejada)", palette::ACCENT_2),
    ];
    let gradient_id = format!("{}-volume", props.id);
    let volume_opacity = palette::VOLUME_AREA_OPACITY;

    let volume_markers = markers(
        &props.id,
        tooltip,
        frame,
        &layout.volume,
        &props.volume,
        MarkerSeries::Volume,
    );
    let headcount_markers = markers(
        &props.id,
        tooltip,
        frame,
        &layout.headcount,
        &props.headcount,
        MarkerSeries::Headcount,
    );

    let labels = layout.volume.labels.iter().enumerate().map(|(i, label)| {
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
            Legend { entries: legend }
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
                                stop_color: palette::VOLUME,
                                stop_opacity: "{volume_opacity}",
                            }
                            stop {
                                offset: "100%",
                                stop_color: palette::VOLUME,
                                stop_opacity: "0",
                            }
                        }
                    }
                    path {
                        d: "{layout.volume_area}",
                        fill: "url(#{gradient_id})",
                        stroke: "none",
                    }
                    path {
                        d: "{layout.volume.path}",
                        fill: "none",
                        stroke: palette::VOLUME,
                        stroke_width: "3",
                        stroke_linecap: "round",
                    }
                    path {
                        d: "{layout.headcount.path}",
                        fill: "none",
                        stroke: palette::ACCENT_2,
                        stroke_width: "3",
                        stroke_linecap: "round",
                        stroke_dasharray: "6 6",
                    }
                    {volume_markers.into_iter()}
                    {headcount_markers.into_iter()}
                    {labels}
                }
                if let Some(tip) = active {
                    TooltipBubble { tooltip: tip }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarkerSeries {
    Volume,
    Headcount,
}

impl MarkerSeries {
    fn index(self) -> usize {
        match self {
            MarkerSeries::Volume => 0,
            MarkerSeries::Headcount => 1,
        }
    }

    fn color(self) -> &'static str {
        match self {
            MarkerSeries::Volume => palette::VOLUME,
            MarkerSeries::Headcount => palette::ACCENT_2,
        }
    }

    fn format(self) -> ValueFormat {
        match self {
            MarkerSeries::Volume => ValueFormat::Conversations,
            MarkerSeries::Headcount => ValueFormat::Agents,
        }
    }
}

/// Hover markers of one series. The tooltip is anchored at the marker,
/// scaled from SVG units to the rendered container and clamped inside it.
fn markers(
    container: &str,
    tooltip: Signal<TooltipState>,
    frame: PlotFrame,
    scaled: &ScaledSeries,
    source: &[MonthPoint],
    series: MarkerSeries,
) -> Vec<Element> {
    let color = series.color();
    scaled
        .points
        .iter()
        .zip(source.iter())
        .enumerate()
        .map(|(i, (point, p))| {
            let point: PlotPoint = *point;
            let anchor = MarkerId::new(series.index(), i);
            let container = container.to_string();
            let label = p.month.to_string();
            let value = series.format().apply(p.value);
            rsx! {
                circle {
                    key: "{series.index()}-{i}",
                    cx: "{point.x}",
                    cy: "{point.y}",
                    r: "5",
                    fill: color,
                    stroke: palette::PANEL,
                    stroke_width: "2",
                    style: "cursor: pointer;",
                    onmouseenter: move |_| {
                        let Some(rect) = dom::container_rect(&container) else {
                            return;
                        };
                        tooltip_bubble::show(
                            tooltip,
                            Tooltip {
                                anchor,
                                position: rect.clamp_marker(point, &frame, BAR_INSETS),
                                label: label.clone(),
                                value: value.clone(),
                            },
                        );
                    },
                    onmouseleave: move |_| tooltip_bubble::hide(tooltip, anchor),
                }
            }
        })
        .collect()
}
