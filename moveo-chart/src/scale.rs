//! Plot frames and value scales.
//!
//! A chart is drawn into a fixed SVG coordinate box (the [`PlotFrame`]) with
//! the same padding on every side. Values map linearly onto the vertical
//! range so that the scale maximum touches the top inset and zero sits on the
//! baseline. Horizontal positions are evenly spaced by index, not by the real
//! distance between months.

/// SVG coordinate box a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    /// Inset applied on all four sides.
    pub padding: f64,
}

/// Frame of the line/area charts.
pub const LINE_FRAME: PlotFrame = PlotFrame::new(700.0, 210.0, 28.0);

/// Frame of the volume vs headcount chart.
pub const DUAL_SCALE_FRAME: PlotFrame = PlotFrame::new(700.0, 230.0, 28.0);

/// Distance between the baseline and the month labels.
pub const AXIS_LABEL_OFFSET: f64 = 16.0;

impl PlotFrame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Same frame with a different height, used by charts taller than the default.
    pub const fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    pub fn usable_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    pub fn usable_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    /// y coordinate of zero.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// y coordinate of the scale maximum.
    pub fn top(&self) -> f64 {
        self.padding
    }

    /// Horizontal distance between consecutive points of a `count`-point series.
    ///
    /// A single point gets the full usable width as its step, so it is drawn
    /// at the left padding instead of dividing by zero.
    pub fn step_x(&self, count: usize) -> f64 {
        self.usable_width() / count.saturating_sub(1).max(1) as f64
    }

    pub fn x_at(&self, index: usize, step: f64) -> f64 {
        self.padding + index as f64 * step
    }

    pub fn y_for(&self, value: f64, scale: &ValueScale) -> f64 {
        self.baseline() - scale.extent(value, self.usable_height())
    }

    /// y coordinate of the month labels.
    pub fn label_y(&self) -> f64 {
        self.baseline() + AXIS_LABEL_OFFSET
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Linear map from `[0, max]` onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max: f64,
}

impl ValueScale {
    pub fn new(max: f64) -> Self {
        Self { max }
    }

    /// Scale whose maximum is the largest of `values`, or `None` if there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        series_max(values).map(Self::new)
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether values can be placed on this scale at all.
    ///
    /// A zero, negative or non-finite maximum has no usable range; every value
    /// then collapses onto the baseline.
    pub fn is_degenerate(&self) -> bool {
        !(self.max.is_finite() && self.max > 0.0)
    }

    /// `value / max`, or 0 on a degenerate scale.
    pub fn ratio(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            value / self.max
        }
    }

    /// Length of `value` on a range of `range` pixels.
    pub fn extent(&self, value: f64, range: f64) -> f64 {
        self.ratio(value) * range
    }
}

/// Largest of `values`, ignoring NaN.
pub fn series_max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some(v),
        Some(max) => Some(max.max(v)),
    })
}

/// A projected point in SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Project `values` onto `frame`, spacing them by `step`.
pub fn project(frame: &PlotFrame, values: &[f64], scale: &ValueScale, step: f64) -> Vec<PlotPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| PlotPoint {
            x: frame.x_at(i, step),
            y: frame.y_for(value, scale),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_touches_top_inset() {
        let values = [9.0, 26.0, 49.0, 60.0, 62.0];
        let scale = ValueScale::from_values(values).unwrap();
        let step = LINE_FRAME.step_x(values.len());
        let points = project(&LINE_FRAME, &values, &scale, step);
        assert_eq!(points[4].y, LINE_FRAME.top());
        assert_eq!(
            LINE_FRAME.baseline() - points[4].y,
            LINE_FRAME.usable_height()
        );
    }

    #[test]
    fn zero_sits_on_baseline() {
        let scale = ValueScale::new(50.0);
        assert_eq!(LINE_FRAME.y_for(0.0, &scale), LINE_FRAME.baseline());
    }

    #[test]
    fn single_point_sits_at_left_padding() {
        let step = LINE_FRAME.step_x(1);
        assert_eq!(step, LINE_FRAME.usable_width());
        let scale = ValueScale::new(10.0);
        let points = project(&LINE_FRAME, &[10.0], &scale, step);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, LINE_FRAME.padding);
        assert_eq!(points[0].y, LINE_FRAME.top());
    }

    #[test]
    fn points_are_evenly_spaced_by_index() {
        let step = LINE_FRAME.step_x(5);
        assert_eq!(step, 161.0);
        assert_eq!(LINE_FRAME.x_at(0, step), 28.0);
        assert_eq!(LINE_FRAME.x_at(4, step), 672.0);
    }

    #[test]
    fn degenerate_scale_collapses_to_baseline() {
        let scale = ValueScale::new(0.0);
        assert!(scale.is_degenerate());
        assert_eq!(LINE_FRAME.y_for(0.0, &scale), LINE_FRAME.baseline());
        assert_eq!(scale.extent(5.0, 170.0), 0.0);

        let scale = ValueScale::new(f64::NAN);
        assert!(scale.is_degenerate());
        assert_eq!(scale.ratio(3.0), 0.0);
    }

    #[test]
    fn series_max_handles_empty_and_nan() {
        assert_eq!(series_max(Vec::<f64>::new()), None);
        assert_eq!(series_max([3.0, f64::NAN, 7.0]), Some(7.0));
        assert!(ValueScale::from_values(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn view_box_uses_frame_size() {
        assert_eq!(LINE_FRAME.view_box(), "0 0 700 210");
        assert_eq!(LINE_FRAME.with_height(230.0), DUAL_SCALE_FRAME);
    }
}
