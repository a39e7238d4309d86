//! Brain table in the terminal.

use moveo_data::brains::{sorted_brains, BrainSortKey};
use moveo_data::dataset;
use moveo_data::models::BrainRow;
use moveo_utils::format::{format_number, PLACEHOLDER};
use std::io::{self, Write};

/// Print the brain table sorted by `sort_by`.
///
/// An unknown sort key is not an error: the table keeps its authored order.
pub fn run_brains(sort_by: &str) -> anyhow::Result<()> {
    let rows = rows_for(sort_by);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &rows)?;
    Ok(())
}

/// The dataset rows in the order requested by `sort_by`.
pub fn rows_for(sort_by: &str) -> Vec<BrainRow> {
    match BrainSortKey::parse(sort_by) {
        Some(key) => sorted_brains(dataset::BRAINS, key),
        None => {
            log::warn!("unknown sort key '{}', keeping authored order", sort_by);
            dataset::BRAINS.to_vec()
        }
    }
}

pub fn write_table<W: Write>(out: &mut W, rows: &[BrainRow]) -> io::Result<()> {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Cérebro".chars().count()))
        .max()
        .unwrap_or(0);

    writeln!(
        out,
        "{:<w$}  {:>12}  {:>12}  {:>12}",
        "Cérebro",
        "Conversas",
        "Mensagens",
        "Clientes",
        w = name_width
    )?;
    for row in rows {
        let clients = row
            .clients
            .map(|c| format_number(f64::from(c)))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        writeln!(
            out,
            "{:<w$}  {:>12}  {:>12}  {:>12}",
            row.name,
            format_number(f64::from(row.conversations)),
            format_number(f64::from(row.messages)),
            clients,
            w = name_width
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_by_messages() {
        let rows = rows_for("messages");
        assert_eq!(rows[0].name, "Router Prod Sem Guidelines");
        assert_eq!(rows[1].name, "Transações");
        assert!(rows.windows(2).all(|w| w[0].messages >= w[1].messages));
    }

    #[test]
    fn test_unknown_key_keeps_authored_order() {
        let rows = rows_for("revenue");
        assert_eq!(rows, dataset::BRAINS.to_vec());
    }

    #[test]
    fn test_table_formats_numbers() {
        let rows = [BrainRow {
            name: "KYC",
            conversations: 8300,
            messages: 23700,
            clients: None,
        }];
        let mut buf = Vec::new();
        write_table(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Cérebro"));
        assert!(lines[1].contains("8.300"));
        assert!(lines[1].contains("23.700"));
        assert!(lines[1].trim_end().ends_with('—'));
    }
}
