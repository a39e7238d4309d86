//! Record types for the dashboard dataset.
//!
//! All structs derive `Serialize` so the CLI can export them as CSV or JSON,
//! and `PartialEq` so they can be passed as Dioxus props.

use moveo_utils::error::ChartError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A single observation on the monthly axis.
///
/// Months are short pt-BR labels ("Jul", "Ago", ...). Within one series the
/// labels are unique and kept in authored order; nothing sorts them by date.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthPoint {
    pub month: &'static str,
    pub value: f64,
}

impl MonthPoint {
    pub const fn new(month: &'static str, value: f64) -> Self {
        Self { month, value }
    }
}

/// Which support platform a data point was collected on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeriodTag {
    Zendesk,
    Moveo,
}

/// A monthly metric observation tagged with its collection period.
///
/// The tag is carried for completeness; rendering ignores it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TaggedPoint {
    pub month: &'static str,
    pub value: f64,
    pub period: PeriodTag,
}

impl TaggedPoint {
    pub const fn moveo(month: &'static str, value: f64) -> Self {
        Self {
            month,
            value,
            period: PeriodTag::Moveo,
        }
    }

    /// Drop the period tag.
    pub fn point(&self) -> MonthPoint {
        MonthPoint::new(self.month, self.value)
    }
}

/// The three AI maturity metrics selectable in section 1.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    /// Share of conversations resolved without human escalation.
    #[default]
    Containment,
    /// Share of conversations resolved without an "unknown intent" fallback.
    Coverage,
    /// Share of conversations with meaningful engagement.
    Meaningful,
}

impl MetricKey {
    /// Selector order.
    pub const ALL: [MetricKey; 3] = [
        MetricKey::Containment,
        MetricKey::Coverage,
        MetricKey::Meaningful,
    ];

    /// Lowercase key used by the CLI and in exported files.
    pub fn key(self) -> &'static str {
        match self {
            MetricKey::Containment => "containment",
            MetricKey::Coverage => "coverage",
            MetricKey::Meaningful => "meaningful",
        }
    }

    /// Label for the selector button.
    pub fn button_label(self) -> &'static str {
        match self {
            MetricKey::Containment => "Contenção",
            MetricKey::Coverage => "Coverage",
            MetricKey::Meaningful => "% Meaningful",
        }
    }

    /// Label for the chart legend.
    pub fn legend_label(self) -> &'static str {
        match self {
            MetricKey::Containment => "Taxa de contenção",
            MetricKey::Coverage => "Coverage",
            MetricKey::Meaningful => "% Meaningful",
        }
    }

    /// Parse a lowercase key, returning `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromStr for MetricKey {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "containment" => Ok(MetricKey::Containment),
            "coverage" => Ok(MetricKey::Coverage),
            "meaningful" => Ok(MetricKey::Meaningful),
            _ => Err(ChartError::UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// IA vs human conversation volume for one month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DualPoint {
    pub month: &'static str,
    pub ia: f64,
    pub human: f64,
}

impl DualPoint {
    pub const fn new(month: &'static str, ia: f64, human: f64) -> Self {
        Self { month, ia, human }
    }

    /// Combined volume, used as the stacked-bar scale.
    pub fn total(&self) -> f64 {
        self.ia + self.human
    }
}

/// Aggregate figures for one comparison bucket (pre vs post automation).
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub label: &'static str,
    /// Conversations handled during the period.
    pub total_volume: f64,
    /// Average human handling time, in minutes.
    pub aht: f64,
}

/// Usage of one specialised conversational agent ("cérebro").
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BrainRow {
    pub name: &'static str,
    pub conversations: u32,
    pub messages: u32,
    /// Not every export carries a client count; shown as a dash when absent.
    pub clients: Option<u32>,
}

/// A monetary figure shown on the ROI summary cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RoiFigure {
    pub label: &'static str,
    /// Value in Brazilian Real.
    pub amount: f64,
    pub note: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_key_parses_known_keys() {
        assert_eq!(MetricKey::parse("containment"), Some(MetricKey::Containment));
        assert_eq!(MetricKey::parse(" Coverage "), Some(MetricKey::Coverage));
        assert_eq!(MetricKey::parse("meaningful"), Some(MetricKey::Meaningful));
    }

    #[test]
    fn metric_key_rejects_unknown_keys() {
        assert_eq!(MetricKey::parse("csat"), None);
        let err = "csat".parse::<MetricKey>().unwrap_err();
        assert_eq!(err, ChartError::UnknownKey("csat".to_string()));
    }

    #[test]
    fn metric_key_default_is_containment() {
        assert_eq!(MetricKey::default(), MetricKey::Containment);
        assert_eq!(MetricKey::Containment.to_string(), "containment");
    }

    #[test]
    fn tagged_point_drops_period() {
        let tagged = TaggedPoint::moveo("Jul", 9.0);
        assert_eq!(tagged.point(), MonthPoint::new("Jul", 9.0));
    }

    #[test]
    fn serializes_period_summary_in_camel_case() {
        let period = PeriodSummary {
            label: "Mar-Jul (Zendesk)",
            total_volume: 98936.0,
            aht: 16.4,
        };
        let json = serde_json::to_value(period).unwrap();
        assert_eq!(json["totalVolume"], 98936.0);
        assert_eq!(json["aht"], 16.4);
    }
}
