//! Line/area chart layout.

use crate::scale::{series_max, PlotFrame, ValueScale};
use crate::series::ScaledSeries;
use moveo_data::models::MonthPoint;
use moveo_utils::error::ChartError;

/// Geometry for a line/area chart with an optional dashed overlay.
///
/// Both series share one scale whose maximum covers every value of both.
/// Without an overlay the maximum also covers zero, so an all-negative
/// series still has a defined top. The overlay reuses the primary series'
/// x step: its points line up with the primary markers by index.
#[derive(Debug, Clone, PartialEq)]
pub struct LineAreaLayout {
    pub frame: PlotFrame,
    pub primary: ScaledSeries,
    /// Gradient-filled area under the primary stroke.
    pub area_path: String,
    pub secondary: Option<ScaledSeries>,
}

impl LineAreaLayout {
    pub fn compute(
        frame: PlotFrame,
        primary: &[MonthPoint],
        secondary: Option<&[MonthPoint]>,
    ) -> Result<Self, ChartError> {
        if primary.is_empty() {
            return Err(ChartError::EmptySeries("primary".to_string()));
        }
        // An empty overlay is treated as no overlay.
        let secondary = secondary.filter(|s| !s.is_empty());

        let primary_values = primary.iter().map(|p| p.value);
        let max = match secondary {
            Some(overlay) => series_max(primary_values.chain(overlay.iter().map(|p| p.value))),
            None => series_max(primary_values.chain(std::iter::once(0.0))),
        }
        .ok_or_else(|| ChartError::EmptySeries("primary".to_string()))?;
        let scale = ValueScale::new(max);
        let step_x = frame.step_x(primary.len());

        let primary = ScaledSeries::with_scale(&frame, primary, scale, step_x);
        let secondary = secondary.map(|s| ScaledSeries::with_scale(&frame, s, scale, step_x));
        log::debug!(
            "line layout: {} points, max {}, overlay: {}",
            primary.points.len(),
            max,
            secondary.is_some()
        );

        Ok(Self {
            frame,
            area_path: primary.area_path(&frame),
            primary,
            secondary,
        })
    }

    /// Pixel height of the drawable range.
    pub fn plot_height(&self) -> f64 {
        self.frame.usable_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LINE_FRAME;
    use moveo_data::dataset;
    use moveo_data::models::MetricKey;

    #[test]
    fn containment_line_scales_to_last_point() {
        let points = dataset::metric_points(MetricKey::Containment);
        let layout = LineAreaLayout::compute(LINE_FRAME, &points, None).unwrap();

        assert_eq!(layout.primary.points.len(), 5);
        assert_eq!(layout.primary.scale.max(), 62.0);

        let last = layout.primary.points[4];
        assert_eq!(last.y, LINE_FRAME.top());

        let first = layout.primary.points[0];
        let first_height = LINE_FRAME.baseline() - first.y;
        let expected = 9.0 / 62.0 * layout.plot_height();
        assert!((first_height - expected).abs() < 1e-9);
        assert_eq!(first.x, LINE_FRAME.padding);
    }

    #[test]
    fn area_closes_on_baseline() {
        let points = dataset::metric_points(MetricKey::Coverage);
        let layout = LineAreaLayout::compute(LINE_FRAME, &points, None).unwrap();
        assert!(layout.area_path.starts_with(&layout.primary.path));
        assert!(layout.area_path.ends_with("L 672,182 L 28,182 Z"));
    }

    #[test]
    fn overlay_shares_scale_and_step() {
        let primary = [MonthPoint::new("Jul", 10.0), MonthPoint::new("Ago", 20.0)];
        let overlay = [MonthPoint::new("Jul", 40.0), MonthPoint::new("Ago", 5.0), MonthPoint::new("Set", 1.0)];
        let layout = LineAreaLayout::compute(LINE_FRAME, &primary, Some(&overlay)).unwrap();

        let secondary = layout.secondary.as_ref().unwrap();
        assert_eq!(layout.primary.scale.max(), 40.0);
        assert_eq!(secondary.scale, layout.primary.scale);
        assert_eq!(secondary.step_x, layout.primary.step_x);
        assert_eq!(secondary.points[0].y, LINE_FRAME.top());
    }

    #[test]
    fn all_zero_series_stays_on_baseline() {
        let primary = [MonthPoint::new("Jul", 0.0), MonthPoint::new("Ago", 0.0)];
        let layout = LineAreaLayout::compute(LINE_FRAME, &primary, None).unwrap();
        assert!(layout.primary.points.iter().all(|p| p.y == LINE_FRAME.baseline()));
    }

    #[test]
    fn empty_primary_is_rejected_and_empty_overlay_ignored() {
        assert!(LineAreaLayout::compute(LINE_FRAME, &[], None).is_err());
        let primary = [MonthPoint::new("Jul", 3.0)];
        let layout = LineAreaLayout::compute(LINE_FRAME, &primary, Some(&[])).unwrap();
        assert!(layout.secondary.is_none());
    }
}
