//! Brain usage table.

use crate::theme;
use dioxus::prelude::*;
use moveo_data::models::BrainRow;
use moveo_utils::format::{format_number, PLACEHOLDER};

#[derive(Props, Clone, PartialEq)]
pub struct BrainTableProps {
    /// Rows in display order
    pub rows: Vec<BrainRow>,
}

/// Conversations, messages and clients per brain. Missing client counts
/// show a dash.
#[component]
pub fn BrainTable(props: BrainTableProps) -> Element {
    rsx! {
        table {
            style: theme::TABLE,
            thead {
                tr {
                    th { style: theme::TABLE_HEAD_CELL, "Cérebro" }
                    th { style: theme::TABLE_HEAD_CELL, "Conversas" }
                    th { style: theme::TABLE_HEAD_CELL, "Mensagens" }
                    th { style: theme::TABLE_HEAD_CELL, "Clientes" }
                }
            }
            tbody {
                for row in props.rows.iter() {
                    tr {
                        key: "{row.name}",
                        td { style: theme::TABLE_CELL, "{row.name}" }
                        td { style: theme::TABLE_CELL, {format_number(f64::from(row.conversations))} }
                        td { style: theme::TABLE_CELL, {format_number(f64::from(row.messages))} }
                        td { style: theme::TABLE_CELL, {clients_cell(row)} }
                    }
                }
            }
        }
    }
}

fn clients_cell(row: &BrainRow) -> String {
    row.clients
        .map(|c| format_number(f64::from(c)))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_clients_render_as_dash() {
        let row = BrainRow {
            name: "Handover",
            conversations: 29000,
            messages: 69600,
            clients: None,
        };
        assert_eq!(clients_cell(&row), "—");
        let row = BrainRow {
            clients: Some(93600),
            ..row
        };
        assert_eq!(clients_cell(&row), "93.600");
    }
}
