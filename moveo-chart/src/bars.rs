//! Bar heights for the single, paired, stacked and period-comparison charts.
//!
//! Bars are plain HTML blocks anchored to the bottom of a fixed-height row;
//! only their pixel height is computed here.

use crate::scale::{series_max, ValueScale};
use moveo_data::models::{DualPoint, MonthPoint, PeriodSummary};
use moveo_utils::error::ChartError;

/// Height of the tallest bar in the monthly bar charts.
pub const BAR_PLOT_HEIGHT: f64 = 170.0;
/// Height of the row the monthly bars stand in.
pub const BAR_ROW_HEIGHT: f64 = 180.0;
/// Height of the tallest bar in the period comparison.
pub const PERIOD_PLOT_HEIGHT: f64 = 140.0;
pub const PERIOD_ROW_HEIGHT: f64 = 170.0;

/// One bar (or stacked segment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub value: f64,
    pub height: f64,
}

impl Bar {
    pub fn scaled(value: f64, scale: &ValueScale, plot_height: f64) -> Self {
        Self {
            value,
            height: scale.extent(value, plot_height),
        }
    }
}

/// A bar with its month label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBar {
    pub month: &'static str,
    pub bar: Bar,
}

/// IA and human bars for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPair {
    pub month: &'static str,
    pub ia: Bar,
    pub human: Bar,
}

/// Volume and AHT bars for one comparison period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodBars {
    pub label: &'static str,
    pub volume: Bar,
    pub aht: Bar,
}

/// How the IA vs human comparison is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLayout {
    /// One column per month, human segment above the IA segment.
    Stacked,
    /// Two adjacent bars per month.
    Paired,
}

impl VolumeLayout {
    pub fn from_stacked(stacked: bool) -> Self {
        if stacked {
            VolumeLayout::Stacked
        } else {
            VolumeLayout::Paired
        }
    }

    pub fn bars(self, data: &[DualPoint], plot_height: f64) -> Result<Vec<BarPair>, ChartError> {
        match self {
            VolumeLayout::Stacked => stacked_bars(data, plot_height),
            VolumeLayout::Paired => paired_bars(data, plot_height),
        }
    }
}

/// One bar per month against the series maximum.
pub fn single_bars(points: &[MonthPoint], plot_height: f64) -> Result<Vec<MonthBar>, ChartError> {
    let scale = ValueScale::from_values(points.iter().map(|p| p.value))
        .ok_or_else(|| ChartError::EmptySeries("metric".to_string()))?;
    Ok(points
        .iter()
        .map(|p| MonthBar {
            month: p.month,
            bar: Bar::scaled(p.value, &scale, plot_height),
        })
        .collect())
}

/// Adjacent IA and human bars sharing the maximum of both series.
pub fn paired_bars(data: &[DualPoint], plot_height: f64) -> Result<Vec<BarPair>, ChartError> {
    let scale = ValueScale::from_values(data.iter().flat_map(|d| [d.ia, d.human]))
        .ok_or_else(|| ChartError::EmptySeries("volume".to_string()))?;
    Ok(pairs(data, &scale, plot_height))
}

/// Stacked IA and human segments scaled against the largest monthly total.
///
/// Each segment is sized from that shared maximum on its own rather than as
/// a cumulative sum, so the column height equals the month's total share of
/// the maximum only approximately. This is a cosmetic layout, not a
/// stacked-totals chart.
pub fn stacked_bars(data: &[DualPoint], plot_height: f64) -> Result<Vec<BarPair>, ChartError> {
    let scale = ValueScale::from_values(data.iter().map(DualPoint::total))
        .ok_or_else(|| ChartError::EmptySeries("volume".to_string()))?;
    Ok(pairs(data, &scale, plot_height))
}

fn pairs(data: &[DualPoint], scale: &ValueScale, plot_height: f64) -> Vec<BarPair> {
    data.iter()
        .map(|d| BarPair {
            month: d.month,
            ia: Bar::scaled(d.ia, scale, plot_height),
            human: Bar::scaled(d.human, scale, plot_height),
        })
        .collect()
}

/// Volume and AHT bars per period, each measure against its own maximum.
pub fn period_bars(periods: &[PeriodSummary], plot_height: f64) -> Result<Vec<PeriodBars>, ChartError> {
    let volume_max = series_max(periods.iter().map(|p| p.total_volume));
    let aht_max = series_max(periods.iter().map(|p| p.aht));
    let (Some(volume_max), Some(aht_max)) = (volume_max, aht_max) else {
        return Err(ChartError::EmptySeries("periods".to_string()));
    };
    let volume_scale = ValueScale::new(volume_max);
    let aht_scale = ValueScale::new(aht_max);
    Ok(periods
        .iter()
        .map(|p| PeriodBars {
            label: p.label,
            volume: Bar::scaled(p.total_volume, &volume_scale, plot_height),
            aht: Bar::scaled(p.aht, &aht_scale, plot_height),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moveo_data::dataset;
    use moveo_data::models::MetricKey;

    #[test]
    fn tallest_single_bar_fills_plot() {
        let points = dataset::metric_points(MetricKey::Containment);
        let bars = single_bars(&points, BAR_PLOT_HEIGHT).unwrap();
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[4].bar.height, BAR_PLOT_HEIGHT);
        assert!((bars[0].bar.height - 9.0 / 62.0 * 170.0).abs() < 1e-9);
        assert_eq!(bars[0].month, "Jul");
    }

    #[test]
    fn paired_bars_share_max_of_both_series() {
        let bars = paired_bars(dataset::VOLUME_IA_VS_HUMAN, BAR_PLOT_HEIGHT).unwrap();
        // Set IA (23411) is the largest single value.
        assert_eq!(bars[2].ia.height, BAR_PLOT_HEIGHT);
        assert!(bars.iter().all(|b| b.ia.height <= BAR_PLOT_HEIGHT && b.human.height <= BAR_PLOT_HEIGHT));
        assert!((bars[1].human.height - 16617.0 / 23411.0 * 170.0).abs() < 1e-9);
    }

    #[test]
    fn stacked_segments_scale_independently_from_largest_total() {
        let bars = stacked_bars(dataset::VOLUME_IA_VS_HUMAN, BAR_PLOT_HEIGHT).unwrap();
        // Set has the largest total: 23411 + 15267.
        let max_total = 38678.0;
        let set = bars[2];
        assert!((set.ia.height + set.human.height - BAR_PLOT_HEIGHT).abs() < 1e-9);
        assert!((bars[0].ia.height - 9976.0 / max_total * 170.0).abs() < 1e-9);
        assert!((bars[0].human.height - 10763.0 / max_total * 170.0).abs() < 1e-9);
    }

    #[test]
    fn toggling_layout_keeps_values() {
        let stacked = VolumeLayout::from_stacked(true)
            .bars(dataset::VOLUME_IA_VS_HUMAN, BAR_PLOT_HEIGHT)
            .unwrap();
        let paired = VolumeLayout::from_stacked(false)
            .bars(dataset::VOLUME_IA_VS_HUMAN, BAR_PLOT_HEIGHT)
            .unwrap();
        assert_eq!(stacked.len(), paired.len());
        for (s, p) in stacked.iter().zip(paired.iter()) {
            assert_eq!(s.month, p.month);
            assert_eq!(s.ia.value, p.ia.value);
            assert_eq!(s.human.value, p.human.value);
        }
        assert_ne!(stacked[0].ia.height, paired[0].ia.height);
    }

    #[test]
    fn period_measures_use_independent_maxima() {
        let bars = period_bars(&dataset::periods(), PERIOD_PLOT_HEIGHT).unwrap();
        assert_eq!(bars[0].volume.height, PERIOD_PLOT_HEIGHT);
        assert_eq!(bars[0].aht.height, PERIOD_PLOT_HEIGHT);
        assert!((bars[1].volume.height - 47743.0 / 98936.0 * 140.0).abs() < 1e-9);
        assert!((bars[1].aht.height - 14.8 / 16.4 * 140.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(single_bars(&[], BAR_PLOT_HEIGHT).is_err());
        assert!(paired_bars(&[], BAR_PLOT_HEIGHT).is_err());
        assert!(stacked_bars(&[], BAR_PLOT_HEIGHT).is_err());
        assert!(period_bars(&[], PERIOD_PLOT_HEIGHT).is_err());
    }
}
