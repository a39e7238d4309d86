//! Dataset export as CSV or JSON.

use anyhow::Context;
use clap::ValueEnum;
use moveo_data::dataset;
use moveo_data::models::{MetricKey, PeriodTag};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// The exportable tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Containment, coverage and meaningful per month
    Metrics,
    /// IA vs human volume per month
    Volume,
    /// Total volume per month
    Totals,
    /// Human headcount per month
    Headcount,
    /// Zendesk and Moveo period summaries
    Periods,
    /// Brain usage table
    Brains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// One metric observation in long format.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRecord {
    pub metric: &'static str,
    pub month: &'static str,
    pub value: f64,
    pub period: PeriodTag,
}

/// Export `dataset` to `output`, or stdout when no path is given.
pub fn run_export(dataset: Dataset, format: ExportFormat, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
            let mut writer = BufWriter::new(file);
            write_dataset(&mut writer, dataset, format)?;
            writer.flush().with_context(|| format!("Failed to write {}", path))?;
            log::info!("Exported {:?} as {:?} to {}", dataset, format, path);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_dataset(&mut out, dataset, format)?;
        }
    }
    Ok(())
}

pub fn write_dataset<W: Write>(out: &mut W, dataset: Dataset, format: ExportFormat) -> anyhow::Result<()> {
    match dataset {
        Dataset::Metrics => write_records(out, &metric_records(), format),
        Dataset::Volume => write_records(out, dataset::VOLUME_IA_VS_HUMAN, format),
        Dataset::Totals => write_records(out, dataset::TOTAL_VOLUMES, format),
        Dataset::Headcount => write_records(out, dataset::HEADCOUNT_BY_MONTH, format),
        Dataset::Periods => write_records(out, &dataset::periods(), format),
        Dataset::Brains => write_records(out, dataset::BRAINS, format),
    }
}

/// All three metric series, one row per (metric, month).
pub fn metric_records() -> Vec<MetricRecord> {
    MetricKey::ALL
        .iter()
        .flat_map(|&key| {
            dataset::monthly_metric(key).iter().map(move |p| MetricRecord {
                metric: key.key(),
                month: p.month,
                value: p.value,
                period: p.period,
            })
        })
        .collect()
}

/// Serialize `records` with a header row (CSV) or as a pretty array (JSON).
///
/// Optional fields become an empty CSV cell or a JSON `null`.
pub fn write_records<W: Write, T: Serialize>(out: &mut W, records: &[T], format: ExportFormat) -> anyhow::Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for record in records {
                wtr.serialize(record).context("Failed to serialize CSV record")?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records).context("Failed to serialize JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(dataset: Dataset, format: ExportFormat) -> String {
        let mut buf = Vec::new();
        write_dataset(&mut buf, dataset, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_totals_csv_has_header_and_rows() {
        let text = export(Dataset::Totals, ExportFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "month,value");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("Jul,11692"));
        assert!(lines[5].starts_with("Nov,29918"));
    }

    #[test]
    fn test_metrics_csv_is_long_format() {
        let text = export(Dataset::Metrics, ExportFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "metric,month,value,period");
        assert_eq!(lines.len(), 1 + 15);
        assert!(lines[1].starts_with("containment,Jul,9"));
        assert!(lines[1].ends_with(",moveo"));
        assert!(lines[15].starts_with("meaningful,Nov,86"));
    }

    #[test]
    fn test_periods_json_uses_camel_case() {
        let text = export(Dataset::Periods, ExportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let periods = value.as_array().unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0]["label"], "Mar-Jul (Zendesk)");
        assert_eq!(periods[1]["totalVolume"].as_f64(), Some(47743.0));
        assert_eq!(periods[1]["aht"].as_f64(), Some(14.8));
    }

    #[test]
    fn test_missing_clients_export_as_empty_or_null() {
        #[derive(Serialize)]
        struct Row {
            name: &'static str,
            clients: Option<u32>,
        }
        let rows = [Row { name: "KYC", clients: None }, Row { name: "Bet", clients: Some(5800) }];

        let mut csv_buf = Vec::new();
        write_records(&mut csv_buf, &rows, ExportFormat::Csv).unwrap();
        let csv_text = String::from_utf8(csv_buf).unwrap();
        assert_eq!(csv_text, "name,clients\nKYC,\nBet,5800\n");

        let mut json_buf = Vec::new();
        write_records(&mut json_buf, &rows, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json_buf).unwrap();
        assert!(value[0]["clients"].is_null());
        assert_eq!(value[1]["clients"], 5800);
    }

    #[test]
    fn test_brains_json_has_every_row() {
        let text = export(Dataset::Brains, ExportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 9);
        assert_eq!(value[2]["name"], "Router Prod Sem Guidelines");
    }
}
