//! Terminal rendition of the dashboard header and ROI cards.

use anyhow::Context;
use moveo_chart::cards::{executive_cards, roi_cards, transfer_card, CardText};
use moveo_data::dataset;
use moveo_data::kpi::{ia_share_pct, ExecutiveKpis};
use moveo_utils::format::{format_decimal, format_number};
use std::io::{self, Write};

/// Print the summary to stdout.
pub fn run_summary() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out)
}

/// Write the KPI cards, both comparison periods and the ROI cards.
pub fn write_summary<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let kpis = ExecutiveKpis::current().context("KPIs are undefined: a source series is empty")?;
    let since = dataset::CONTAINMENT.first().map(|p| p.month).unwrap_or_default();

    writeln!(out, "Evolução e Impacto da IA Moveo")?;
    writeln!(out)?;
    writeln!(out, "KPIs")?;
    write_cards(out, &executive_cards(&kpis, since))?;

    writeln!(out)?;
    writeln!(out, "Moveo vs Período Zendesk")?;
    for period in dataset::periods() {
        writeln!(
            out,
            "  {}: {} atendimentos, AHT {} min",
            period.label,
            format_number(period.total_volume),
            format_decimal(period.aht, 1)
        )?;
    }
    write_cards(out, &[transfer_card(&kpis)])?;

    writeln!(out)?;
    writeln!(out, "ROI")?;
    let share = ia_share_pct(dataset::VOLUME_IA_VS_HUMAN);
    write_cards(out, &roi_cards(&dataset::ROI_FIGURES, &kpis, share))?;
    Ok(())
}

fn write_cards<W: Write>(out: &mut W, cards: &[CardText]) -> io::Result<()> {
    for card in cards {
        writeln!(out, "  {}: {} ({})", card.label, card.value, card.detail)?;
    }
    Ok(())
}
