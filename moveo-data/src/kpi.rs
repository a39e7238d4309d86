//! Headline figures derived from the dataset.
//!
//! These feed the KPI cards at the top of both dashboard variants and the
//! `summary` CLI command.

use crate::dataset;
use crate::models::{DualPoint, MetricKey, MonthPoint, PeriodSummary, TaggedPoint};
use serde::Serialize;

/// KPI card values for the executive header.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ExecutiveKpis {
    /// Containment in the first month of the Moveo period (%).
    pub containment_start: f64,
    /// Containment in the latest month (%).
    pub containment_end: f64,
    /// Percentage-point gain since the first month.
    pub containment_delta: f64,
    pub headcount_start: f64,
    pub headcount_now: f64,
    /// Relative headcount reduction (%).
    pub headcount_drop_pct: f64,
    /// Human AHT in the Moveo period (minutes).
    pub aht_current: f64,
    /// Relative AHT reduction vs the Zendesk period (%).
    pub aht_delta_pct: f64,
    /// Share of conversations escalated to a human before automation (%).
    pub transfer_baseline: f64,
    /// Share escalated now (%).
    pub transfer_current: f64,
    /// Relative reduction in escalations (%).
    pub transfer_delta_pct: f64,
}

impl ExecutiveKpis {
    /// Derive the KPIs from arbitrary series.
    ///
    /// Returns `None` when either series is empty, or when a baseline is
    /// zero and a relative change is undefined.
    pub fn from_series(
        containment: &[TaggedPoint],
        headcount: &[MonthPoint],
        before: &PeriodSummary,
        after: &PeriodSummary,
    ) -> Option<Self> {
        let containment_start = containment.first()?.value;
        let containment_end = containment.last()?.value;
        let headcount_start = headcount.first()?.value;
        let headcount_now = headcount.last()?.value;

        let transfer_baseline = 100.0 - containment_start;
        let transfer_current = 100.0 - containment_end;

        Some(Self {
            containment_start,
            containment_end,
            containment_delta: containment_end - containment_start,
            headcount_start,
            headcount_now,
            headcount_drop_pct: relative_drop(headcount_start, headcount_now)?,
            aht_current: after.aht,
            aht_delta_pct: relative_drop(before.aht, after.aht)?,
            transfer_baseline,
            transfer_current,
            transfer_delta_pct: relative_drop(transfer_baseline, transfer_current)?,
        })
    }

    /// KPIs for the engagement dataset.
    pub fn current() -> Option<Self> {
        let kpis = Self::from_series(
            dataset::monthly_metric(MetricKey::Containment),
            dataset::HEADCOUNT_BY_MONTH,
            &dataset::ZENDESK_PERIOD,
            &dataset::MOVEO_PERIOD,
        );
        if kpis.is_none() {
            log::warn!("KPI derivation skipped: a source series is empty");
        }
        kpis
    }

    /// Agents no longer needed on the floor.
    pub fn headcount_freed(&self) -> f64 {
        self.headcount_start - self.headcount_now
    }
}

/// `(from - to) / from * 100`, undefined for a zero baseline.
pub fn relative_drop(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((from - to) / from * 100.0)
}

/// Share of the IA-vs-human volume handled by the IA across all months (%).
pub fn ia_share_pct(points: &[DualPoint]) -> Option<f64> {
    let ia: f64 = points.iter().map(|p| p.ia).sum();
    let total: f64 = points.iter().map(|p| p.total()).sum();
    if total == 0.0 {
        return None;
    }
    Some(ia / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn current_kpis_match_report() {
        let kpis = ExecutiveKpis::current().unwrap();
        assert_eq!(kpis.containment_end, 62.0);
        assert_eq!(kpis.containment_delta, 53.0);
        assert_eq!(kpis.headcount_start, 40.0);
        assert_eq!(kpis.headcount_now, 12.0);
        assert!(close(kpis.headcount_drop_pct, 70.0));
        assert_eq!(kpis.aht_current, 14.8);
        assert!(close(kpis.aht_delta_pct, (16.4 - 14.8) / 16.4 * 100.0));
        assert_eq!(kpis.transfer_baseline, 91.0);
        assert_eq!(kpis.transfer_current, 38.0);
        assert!(close(kpis.transfer_delta_pct, 53.0 / 91.0 * 100.0));
        assert_eq!(kpis.headcount_freed(), 28.0);
    }

    #[test]
    fn empty_series_yield_no_kpis() {
        let kpis = ExecutiveKpis::from_series(
            &[],
            dataset::HEADCOUNT_BY_MONTH,
            &dataset::ZENDESK_PERIOD,
            &dataset::MOVEO_PERIOD,
        );
        assert!(kpis.is_none());

        let kpis = ExecutiveKpis::from_series(
            dataset::CONTAINMENT,
            &[],
            &dataset::ZENDESK_PERIOD,
            &dataset::MOVEO_PERIOD,
        );
        assert!(kpis.is_none());
    }

    #[test]
    fn relative_drop_guards_zero_baseline() {
        assert_eq!(relative_drop(0.0, 5.0), None);
        assert!(close(relative_drop(40.0, 12.0).unwrap(), 70.0));
    }

    #[test]
    fn ia_share_over_all_months() {
        let points = [DualPoint::new("Jul", 30.0, 10.0), DualPoint::new("Ago", 10.0, 50.0)];
        assert!(close(ia_share_pct(&points).unwrap(), 40.0));
        assert_eq!(ia_share_pct(&[]), None);
    }
}
