//! Text of the KPI and ROI cards.
//!
//! The dashboards and the `summary` command print the same cards, so the
//! wording and number formatting live here rather than in the components.

use moveo_data::kpi::ExecutiveKpis;
use moveo_data::models::RoiFigure;
use moveo_utils::format::{format_currency_brl, format_decimal, format_number, format_percent, format_percent_fixed};

/// One card: small caption, headline value, detail line.
#[derive(Debug, Clone, PartialEq)]
pub struct CardText {
    pub label: String,
    pub value: String,
    pub detail: String,
}

impl CardText {
    pub fn new(label: impl Into<String>, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: detail.into(),
        }
    }
}

/// The four header cards. `since` names the first month of the
/// containment series.
pub fn executive_cards(kpis: &ExecutiveKpis, since: &str) -> Vec<CardText> {
    vec![
        CardText::new(
            "Taxa de contenção atual",
            format_percent(kpis.containment_end),
            format!("{} p.p. desde {}", signed(kpis.containment_delta), since),
        ),
        CardText::new(
            "Headcount humano",
            format!(
                "{} ➜ {} agentes",
                format_number(kpis.headcount_start),
                format_number(kpis.headcount_now)
            ),
            format!("-{}%", format_decimal(kpis.headcount_drop_pct, 0)),
        ),
        CardText::new(
            "AHT humano",
            format!("{} min", format_decimal(kpis.aht_current, 1)),
            format!("{} vs Zendesk", format_percent_fixed(kpis.aht_delta_pct, 1)),
        ),
        CardText::new(
            "Δ CSAT / Δ Transferência",
            "Preencher CSAT",
            format!(
                "Transferência para humano {}% menor",
                format_decimal(kpis.transfer_delta_pct, 0)
            ),
        ),
    ]
}

/// CSAT has no source yet; the card asks for the survey value.
pub fn csat_placeholder() -> CardText {
    CardText::new("Δ CSAT", "Preencher", "substituir pelo valor da pesquisa")
}

/// Escalation to a human before and after the automation.
pub fn transfer_card(kpis: &ExecutiveKpis) -> CardText {
    CardText::new(
        "Δ Transferência para humano",
        format!("-{}%", format_decimal(kpis.transfer_delta_pct, 0)),
        format!(
            "de {} (pré) para {} (atual)",
            format_percent(kpis.transfer_baseline),
            format_percent(kpis.transfer_current)
        ),
    )
}

/// ROI summary: the monetary figures, agents freed and the IA share of
/// the volume (when it is defined).
pub fn roi_cards(figures: &[RoiFigure], kpis: &ExecutiveKpis, ia_share: Option<f64>) -> Vec<CardText> {
    let mut cards: Vec<CardText> = figures
        .iter()
        .map(|f| CardText::new(f.label, format_currency_brl(f.amount), f.note))
        .collect();
    cards.push(CardText::new(
        "Headcount liberado",
        format!("{} agentes", format_number(kpis.headcount_freed())),
        format!(
            "de {} para {} agentes",
            format_number(kpis.headcount_start),
            format_number(kpis.headcount_now)
        ),
    ));
    if let Some(share) = ia_share {
        cards.push(CardText::new(
            "Participação da IA no volume",
            format_percent_fixed(share, 1),
            "atendimentos resolvidos pela IA",
        ));
    }
    cards
}

fn signed(value: f64) -> String {
    let rounded = format_decimal(value, 0);
    if value >= 0.0 {
        format!("+{}", rounded)
    } else {
        rounded
    }
}
