//! Volume vs headcount: two units on one canvas.
//!
//! Total volume (conversations) and headcount (agents) are each fitted to the
//! full plot height with their own maximum and their own x step. The two
//! curves are therefore comparable in shape only, never in magnitude, and the
//! chart legend has to say so.

use crate::scale::PlotFrame;
use crate::series::ScaledSeries;
use moveo_data::models::MonthPoint;
use moveo_utils::error::ChartError;

#[derive(Debug, Clone, PartialEq)]
pub struct DualScaleLayout {
    pub frame: PlotFrame,
    /// Drawn as gradient area plus solid stroke.
    pub volume: ScaledSeries,
    pub volume_area: String,
    /// Drawn as a dashed stroke.
    pub headcount: ScaledSeries,
}

impl DualScaleLayout {
    pub fn compute(
        frame: PlotFrame,
        volume: &[MonthPoint],
        headcount: &[MonthPoint],
    ) -> Result<Self, ChartError> {
        let volume = ScaledSeries::fit(&frame, volume, "volume")?;
        let headcount = ScaledSeries::fit(&frame, headcount, "headcount")?;
        Ok(Self {
            frame,
            volume_area: volume.area_path(&frame),
            volume,
            headcount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::DUAL_SCALE_FRAME;
    use moveo_data::dataset;

    fn layout() -> DualScaleLayout {
        DualScaleLayout::compute(
            DUAL_SCALE_FRAME,
            dataset::TOTAL_VOLUMES,
            dataset::HEADCOUNT_BY_MONTH,
        )
        .unwrap()
    }

    #[test]
    fn maxima_stay_independent() {
        let layout = layout();
        assert_eq!(layout.volume.scale.max(), 29918.0);
        assert_eq!(layout.headcount.scale.max(), 40.0);
    }

    #[test]
    fn each_series_reaches_the_top_inset() {
        let layout = layout();
        let top = DUAL_SCALE_FRAME.top();
        assert_eq!(layout.volume.points[4].y, top);
        assert_eq!(layout.headcount.points[0].y, top);
        assert_eq!(layout.headcount.points[2].y, top);
    }

    #[test]
    fn steps_follow_each_series_length() {
        let layout = layout();
        assert_eq!(layout.volume.step_x, 644.0 / 4.0);
        assert_eq!(layout.headcount.step_x, 644.0 / 10.0);
        assert!((layout.volume.points[4].x - layout.headcount.points[10].x).abs() < 1e-9);
    }

    #[test]
    fn empty_series_are_rejected() {
        let err = DualScaleLayout::compute(DUAL_SCALE_FRAME, dataset::TOTAL_VOLUMES, &[]).unwrap_err();
        assert_eq!(err, ChartError::EmptySeries("headcount".to_string()));
    }
}
