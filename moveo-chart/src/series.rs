//! A single series projected onto a plot frame.

use crate::scale::{project, PlotFrame, PlotPoint, ValueScale};
use moveo_data::models::MonthPoint;
use moveo_utils::error::ChartError;
use std::fmt::Write;

/// Month label under the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: &'static str,
}

/// Points, stroke path and axis labels for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSeries {
    pub scale: ValueScale,
    pub step_x: f64,
    pub points: Vec<PlotPoint>,
    /// `M x,y L x,y ...` through every point.
    pub path: String,
    pub labels: Vec<AxisLabel>,
}

impl ScaledSeries {
    /// Fit a series to the frame using its own maximum and its own x step.
    pub fn fit(frame: &PlotFrame, series: &[MonthPoint], name: &str) -> Result<Self, ChartError> {
        let scale = ValueScale::from_values(series.iter().map(|p| p.value))
            .ok_or_else(|| ChartError::EmptySeries(name.to_string()))?;
        Ok(Self::with_scale(frame, series, scale, frame.step_x(series.len())))
    }

    /// Project a series with an externally chosen scale and step, so several
    /// series can share them.
    pub fn with_scale(frame: &PlotFrame, series: &[MonthPoint], scale: ValueScale, step_x: f64) -> Self {
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        let points = project(frame, &values, &scale, step_x);
        let labels = series
            .iter()
            .enumerate()
            .map(|(i, p)| AxisLabel {
                x: frame.x_at(i, step_x),
                y: frame.label_y(),
                text: p.month,
            })
            .collect();
        Self {
            scale,
            step_x,
            path: line_path(&points),
            points,
            labels,
        }
    }

    /// Closed area between the stroke and the baseline.
    pub fn area_path(&self, frame: &PlotFrame) -> String {
        area_path(&self.points, frame)
    }
}

/// Stroke path through `points`. Empty when there are no points.
pub fn line_path(points: &[PlotPoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{}{},{}", command, p.x, p.y);
    }
    path
}

/// Stroke path closed down to the baseline and back to the left padding.
pub fn area_path(points: &[PlotPoint], frame: &PlotFrame) -> String {
    let Some(last) = points.last() else {
        return String::new();
    };
    format!(
        "{} L {},{} L {},{} Z",
        line_path(points),
        last.x,
        frame.baseline(),
        frame.padding,
        frame.baseline()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LINE_FRAME;

    fn frame() -> PlotFrame {
        PlotFrame::new(100.0, 60.0, 10.0)
    }

    #[test]
    fn path_moves_then_draws_lines() {
        let series = [
            MonthPoint::new("Jul", 0.0),
            MonthPoint::new("Ago", 20.0),
            MonthPoint::new("Set", 40.0),
        ];
        let scaled = ScaledSeries::fit(&frame(), &series, "test").unwrap();
        assert_eq!(scaled.step_x, 40.0);
        assert_eq!(scaled.path, "M10,50 L50,30 L90,10");
        assert_eq!(scaled.area_path(&frame()), "M10,50 L50,30 L90,10 L 90,50 L 10,50 Z");
    }

    #[test]
    fn labels_follow_points() {
        let series = [MonthPoint::new("Jul", 1.0), MonthPoint::new("Ago", 2.0)];
        let scaled = ScaledSeries::fit(&LINE_FRAME, &series, "test").unwrap();
        assert_eq!(scaled.labels.len(), 2);
        assert_eq!(scaled.labels[1].text, "Ago");
        assert_eq!(scaled.labels[1].x, scaled.points[1].x);
        assert_eq!(scaled.labels[0].y, 198.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = ScaledSeries::fit(&frame(), &[], "headcount").unwrap_err();
        assert_eq!(err, ChartError::EmptySeries("headcount".to_string()));
        assert_eq!(area_path(&[], &frame()), "");
        assert_eq!(line_path(&[]), "");
    }
}
