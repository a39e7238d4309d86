//! Hover tooltips: exclusive per-chart state and positioning.
//!
//! Each chart owns one [`TooltipState`]. Showing a tooltip replaces whatever
//! was shown before, so at most one is visible per chart.

use crate::scale::{PlotFrame, PlotPoint};

/// Identifies the marker or bar a tooltip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId {
    /// Series within the chart (0 for the primary series).
    pub series: usize,
    pub index: usize,
}

impl MarkerId {
    pub const fn new(series: usize, index: usize) -> Self {
        Self { series, index }
    }
}

/// Where the tooltip box is anchored inside its chart container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipPosition {
    /// Percentages of the SVG box; follows the SVG when it is resized.
    Percent { left: f64, top: f64 },
    /// Pixels from the container's top-left corner.
    Pixels { left: f64, top: f64 },
}

impl TooltipPosition {
    /// Inline `left`/`top` declarations.
    pub fn css(&self) -> String {
        match self {
            TooltipPosition::Percent { left, top } => format!("left: {}%; top: {}%;", left, top),
            TooltipPosition::Pixels { left, top } => format!("left: {}px; top: {}px;", left, top),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub anchor: MarkerId,
    pub position: TooltipPosition,
    /// Bold first line, usually the month.
    pub label: String,
    /// Formatted value line.
    pub value: String,
}

/// The tooltip currently shown by one chart, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    active: Option<Tooltip>,
}

impl TooltipState {
    /// Show `tooltip`, replacing any other.
    pub fn show(&mut self, tooltip: Tooltip) {
        self.active = Some(tooltip);
    }

    /// Hide the tooltip if it still belongs to `anchor`.
    ///
    /// A late leave event from a marker that has already been replaced does
    /// not hide the newer tooltip. Returns whether anything was hidden.
    pub fn hide(&mut self, anchor: MarkerId) -> bool {
        match &self.active {
            Some(t) if t.anchor == anchor => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }
}

/// Minimum distance kept between the tooltip anchor and the container edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipInsets {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Monthly bar charts and the volume vs headcount markers.
pub const BAR_INSETS: TooltipInsets = TooltipInsets { horizontal: 70.0, vertical: 40.0 };
/// Stacked bars carry a longer "month • Humano" label.
pub const STACKED_INSETS: TooltipInsets = TooltipInsets { horizontal: 80.0, vertical: 40.0 };
/// Period labels ("Mar-Jul (Zendesk) • Volumetria") are the widest.
pub const PERIOD_INSETS: TooltipInsets = TooltipInsets { horizontal: 140.0, vertical: 40.0 };

/// Bounding box of a chart container in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    /// Anchor at the pointer, clamped inside the container insets.
    pub fn clamp_pointer(&self, client_x: f64, client_y: f64, insets: TooltipInsets) -> TooltipPosition {
        TooltipPosition::Pixels {
            left: clamp_between(client_x - self.left, insets.horizontal, self.width - insets.horizontal),
            top: clamp_between(client_y - self.top, insets.vertical, self.height - insets.vertical),
        }
    }

    /// Anchor at an SVG marker, scaled to the rendered container size and
    /// clamped inside the insets.
    pub fn clamp_marker(&self, point: PlotPoint, frame: &PlotFrame, insets: TooltipInsets) -> TooltipPosition {
        let x = point.x / frame.width * self.width;
        let y = point.y / frame.height * self.height;
        TooltipPosition::Pixels {
            left: clamp_between(x, insets.horizontal, self.width - insets.horizontal),
            top: clamp_between(y, insets.vertical, self.height - insets.vertical),
        }
    }
}

/// Anchor at an SVG marker as percentages of the SVG box.
pub fn percent_position(point: PlotPoint, frame: &PlotFrame) -> TooltipPosition {
    TooltipPosition::Percent {
        left: point.x / frame.width * 100.0,
        top: point.y / frame.height * 100.0,
    }
}

/// `value` limited to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: when the container is narrower than
/// both insets (`min > max`) the upper bound wins.
pub fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LINE_FRAME;

    fn tooltip(index: usize, label: &str) -> Tooltip {
        Tooltip {
            anchor: MarkerId::new(0, index),
            position: TooltipPosition::Percent { left: 0.0, top: 0.0 },
            label: label.to_string(),
            value: "1".to_string(),
        }
    }

    fn rect() -> ContainerRect {
        ContainerRect {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 200.0,
        }
    }

    #[test]
    fn hovering_b_replaces_a() {
        let mut state = TooltipState::default();
        state.show(tooltip(0, "Jul"));
        state.show(tooltip(1, "Ago"));
        assert_eq!(state.active().unwrap().label, "Ago");
        assert!(state.is_visible());
    }

    #[test]
    fn late_leave_does_not_hide_newer_tooltip() {
        let mut state = TooltipState::default();
        state.show(tooltip(0, "Jul"));
        state.show(tooltip(1, "Ago"));
        assert!(!state.hide(MarkerId::new(0, 0)));
        assert_eq!(state.active().unwrap().label, "Ago");
        assert!(state.hide(MarkerId::new(0, 1)));
        assert!(!state.is_visible());
    }

    #[test]
    fn same_index_in_another_series_is_a_different_marker() {
        let mut state = TooltipState::default();
        state.show(tooltip(2, "Set"));
        assert!(!state.hide(MarkerId::new(1, 2)));
        state.clear();
        assert!(state.active().is_none());
    }

    #[test]
    fn pointer_is_clamped_inside_insets() {
        let pos = rect().clamp_pointer(110.0, 55.0, BAR_INSETS);
        assert_eq!(pos, TooltipPosition::Pixels { left: 70.0, top: 40.0 });

        let pos = rect().clamp_pointer(490.0, 245.0, BAR_INSETS);
        assert_eq!(pos, TooltipPosition::Pixels { left: 330.0, top: 160.0 });

        let pos = rect().clamp_pointer(300.0, 150.0, BAR_INSETS);
        assert_eq!(pos, TooltipPosition::Pixels { left: 200.0, top: 100.0 });
    }

    #[test]
    fn narrow_container_does_not_panic() {
        let narrow = ContainerRect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 60.0,
        };
        let pos = narrow.clamp_pointer(10.0, 10.0, PERIOD_INSETS);
        assert_eq!(pos, TooltipPosition::Pixels { left: 60.0, top: 20.0 });
    }

    #[test]
    fn marker_position_scales_to_container() {
        let point = PlotPoint { x: 350.0, y: 105.0 };
        let container = ContainerRect {
            left: 0.0,
            top: 0.0,
            width: 1400.0,
            height: 420.0,
        };
        let pos = container.clamp_marker(point, &LINE_FRAME, BAR_INSETS);
        assert_eq!(pos, TooltipPosition::Pixels { left: 700.0, top: 210.0 });
    }

    #[test]
    fn percent_position_css() {
        let pos = percent_position(PlotPoint { x: 350.0, y: 105.0 }, &LINE_FRAME);
        assert_eq!(pos, TooltipPosition::Percent { left: 50.0, top: 50.0 });
        assert_eq!(pos.css(), "left: 50%; top: 50%;");
    }
}
