//! Hand-entered figures for the engagement.
//!
//! Source: `dados.csv`, rows 3-31. The Zendesk period runs Mar-Jul and the
//! Moveo period Jul-Nov; the monthly AI metrics only exist for the latter.

use crate::models::{
    BrainRow, DualPoint, MetricKey, MonthPoint, PeriodSummary, RoiFigure, TaggedPoint,
};

/// Calendar order of the months covered by the report.
pub const MONTHS_ORDER: [&str; 9] = ["Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov"];

pub const CONTAINMENT: &[TaggedPoint] = &[
    TaggedPoint::moveo("Jul", 9.0),
    TaggedPoint::moveo("Ago", 26.0),
    TaggedPoint::moveo("Set", 49.0),
    TaggedPoint::moveo("Out", 60.0),
    TaggedPoint::moveo("Nov", 62.0),
];

pub const COVERAGE: &[TaggedPoint] = &[
    TaggedPoint::moveo("Jul", 51.0),
    TaggedPoint::moveo("Ago", 51.0),
    TaggedPoint::moveo("Set", 57.0),
    TaggedPoint::moveo("Out", 49.0),
    TaggedPoint::moveo("Nov", 38.0),
];

pub const MEANINGFUL: &[TaggedPoint] = &[
    TaggedPoint::moveo("Jul", 11.0),
    TaggedPoint::moveo("Ago", 37.0),
    TaggedPoint::moveo("Set", 63.0),
    TaggedPoint::moveo("Out", 78.0),
    TaggedPoint::moveo("Nov", 86.0),
];

/// Monthly IA vs human conversations. November was not yet closed.
pub const VOLUME_IA_VS_HUMAN: &[DualPoint] = &[
    DualPoint::new("Jul", 9976.0, 10763.0),
    DualPoint::new("Ago", 13331.0, 16617.0),
    DualPoint::new("Set", 23411.0, 15267.0),
    DualPoint::new("Out", 19919.0, 10955.0),
];

/// Total conversations per month across all channels.
pub const TOTAL_VOLUMES: &[MonthPoint] = &[
    MonthPoint::new("Jul", 11692.0),
    MonthPoint::new("Ago", 20847.0),
    MonthPoint::new("Set", 26523.0),
    MonthPoint::new("Out", 22736.0),
    MonthPoint::new("Nov", 29918.0),
];

/// Human agents on the support floor, Jan-Nov.
pub const HEADCOUNT_BY_MONTH: &[MonthPoint] = &[
    MonthPoint::new("Jan", 40.0),
    MonthPoint::new("Fev", 40.0),
    MonthPoint::new("Mar", 40.0),
    MonthPoint::new("Abr", 32.0),
    MonthPoint::new("Mai", 25.0),
    MonthPoint::new("Jun", 20.0),
    MonthPoint::new("Jul", 16.0),
    MonthPoint::new("Ago", 14.0),
    MonthPoint::new("Set", 13.0),
    MonthPoint::new("Out", 12.0),
    MonthPoint::new("Nov", 12.0),
];

pub const ZENDESK_PERIOD: PeriodSummary = PeriodSummary {
    label: "Mar-Jul (Zendesk)",
    total_volume: 98936.0,
    aht: 16.4,
};

pub const MOVEO_PERIOD: PeriodSummary = PeriodSummary {
    label: "Jul-Nov (Moveo)",
    total_volume: 47743.0,
    aht: 14.8,
};

/// Conversations, messages and clients per brain, Jul-Nov.
pub const BRAINS: &[BrainRow] = &[
    BrainRow { name: "Transações", conversations: 21700, messages: 129400, clients: Some(21700) },
    BrainRow { name: "Conta", conversations: 2700, messages: 7600, clients: Some(2700) },
    BrainRow { name: "Router Prod Sem Guidelines", conversations: 93600, messages: 195700, clients: Some(93600) },
    BrainRow { name: "Bônus e Promoções", conversations: 20000, messages: 99500, clients: Some(20000) },
    BrainRow { name: "Handover", conversations: 29000, messages: 69600, clients: Some(29000) },
    BrainRow { name: "Fluxo desligado", conversations: 4000, messages: 14100, clients: Some(4000) },
    BrainRow { name: "KYC", conversations: 8300, messages: 23700, clients: Some(8300) },
    BrainRow { name: "Bet", conversations: 5800, messages: 23500, clients: Some(5800) },
    BrainRow { name: "Jogo Responsável", conversations: 3600, messages: 9200, clients: Some(3600) },
];

/// Monthly payroll saving attributed to the automation.
pub const MONTHLY_SAVINGS_BRL: f64 = 17_749.50;

/// The two monetary figures on the ROI cards.
pub const ROI_FIGURES: [RoiFigure; 2] = [
    RoiFigure {
        label: "Economia mensal estimada",
        amount: MONTHLY_SAVINGS_BRL,
        note: "custo operacional evitado no mês corrente",
    },
    RoiFigure {
        label: "Projeção anual",
        amount: MONTHLY_SAVINGS_BRL * 12.0,
        note: "economia mensal mantida por 12 meses",
    },
];

/// The tagged series for one metric.
pub fn monthly_metric(key: MetricKey) -> &'static [TaggedPoint] {
    match key {
        MetricKey::Containment => CONTAINMENT,
        MetricKey::Coverage => COVERAGE,
        MetricKey::Meaningful => MEANINGFUL,
    }
}

/// The series for one metric without period tags, ready for charting.
pub fn metric_points(key: MetricKey) -> Vec<MonthPoint> {
    monthly_metric(key).iter().map(TaggedPoint::point).collect()
}

/// Both comparison periods, oldest first.
pub fn periods() -> [PeriodSummary; 2] {
    [ZENDESK_PERIOD, MOVEO_PERIOD]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_months(months: impl Iterator<Item = &'static str>) {
        let mut seen = HashSet::new();
        for month in months {
            assert!(seen.insert(month), "month {} appears twice", month);
        }
    }

    #[test]
    fn series_have_unique_months() {
        for key in MetricKey::ALL {
            assert_unique_months(monthly_metric(key).iter().map(|p| p.month));
        }
        assert_unique_months(VOLUME_IA_VS_HUMAN.iter().map(|p| p.month));
        assert_unique_months(TOTAL_VOLUMES.iter().map(|p| p.month));
        assert_unique_months(HEADCOUNT_BY_MONTH.iter().map(|p| p.month));
    }

    #[test]
    fn series_lengths_are_fixed() {
        for key in MetricKey::ALL {
            assert_eq!(monthly_metric(key).len(), 5);
        }
        assert_eq!(VOLUME_IA_VS_HUMAN.len(), 4);
        assert_eq!(TOTAL_VOLUMES.len(), 5);
        assert_eq!(HEADCOUNT_BY_MONTH.len(), 11);
        assert_eq!(BRAINS.len(), 9);
    }

    #[test]
    fn containment_series_matches_report() {
        let values: Vec<f64> = metric_points(MetricKey::Containment)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![9.0, 26.0, 49.0, 60.0, 62.0]);
        assert_eq!(CONTAINMENT[0].month, "Jul");
    }

    #[test]
    fn roi_projection_is_twelve_months_of_savings() {
        assert_eq!(ROI_FIGURES[0].amount, 17749.5);
        assert_eq!(ROI_FIGURES[1].amount, 212994.0);
    }

    #[test]
    fn periods_are_oldest_first() {
        let [before, after] = periods();
        assert_eq!(before.label, "Mar-Jul (Zendesk)");
        assert_eq!(after.label, "Jul-Nov (Moveo)");
    }
}
