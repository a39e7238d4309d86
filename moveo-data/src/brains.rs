//! Sorting for the per-brain usage table.

use crate::models::BrainRow;
use moveo_utils::error::ChartError;
use serde::Serialize;
use std::str::FromStr;

/// Numeric column the brain table can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrainSortKey {
    #[default]
    Conversations,
    Messages,
    Clients,
}

impl BrainSortKey {
    /// Selector order.
    pub const ALL: [BrainSortKey; 3] = [
        BrainSortKey::Conversations,
        BrainSortKey::Messages,
        BrainSortKey::Clients,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BrainSortKey::Conversations => "conversations",
            BrainSortKey::Messages => "messages",
            BrainSortKey::Clients => "clients",
        }
    }

    /// Button / column header label.
    pub fn label(self) -> &'static str {
        match self {
            BrainSortKey::Conversations => "Conversas",
            BrainSortKey::Messages => "Mensagens",
            BrainSortKey::Clients => "Clientes",
        }
    }

    /// Sort value for a row. A missing client count sorts as 0.
    pub fn value_of(self, row: &BrainRow) -> u32 {
        match self {
            BrainSortKey::Conversations => row.conversations,
            BrainSortKey::Messages => row.messages,
            BrainSortKey::Clients => row.clients.unwrap_or(0),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromStr for BrainSortKey {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conversations" => Ok(BrainSortKey::Conversations),
            "messages" => Ok(BrainSortKey::Messages),
            "clients" => Ok(BrainSortKey::Clients),
            _ => Err(ChartError::UnknownKey(s.to_string())),
        }
    }
}

/// Rows ordered by `key`, largest first. Ties keep their authored order.
pub fn sorted_brains(rows: &[BrainRow], key: BrainSortKey) -> Vec<BrainRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| key.value_of(b).cmp(&key.value_of(a)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BRAINS;

    fn rows_with_missing_clients() -> Vec<BrainRow> {
        vec![
            BrainRow { name: "A", conversations: 10, messages: 300, clients: None },
            BrainRow { name: "B", conversations: 30, messages: 100, clients: Some(5) },
            BrainRow { name: "C", conversations: 20, messages: 200, clients: Some(50) },
            BrainRow { name: "D", conversations: 20, messages: 50, clients: None },
        ]
    }

    #[test]
    fn sorting_is_non_increasing_for_every_key() {
        for key in BrainSortKey::ALL {
            let sorted = sorted_brains(BRAINS, key);
            assert_eq!(sorted.len(), BRAINS.len());
            for pair in sorted.windows(2) {
                assert!(
                    key.value_of(&pair[0]) >= key.value_of(&pair[1]),
                    "{} not sorted by {}",
                    pair[0].name,
                    key.key()
                );
            }
        }
    }

    #[test]
    fn router_leads_by_conversations() {
        let sorted = sorted_brains(BRAINS, BrainSortKey::Conversations);
        assert_eq!(sorted[0].name, "Router Prod Sem Guidelines");
        assert_eq!(sorted.last().unwrap().name, "Conta");
    }

    #[test]
    fn missing_clients_sort_last() {
        let sorted = sorted_brains(&rows_with_missing_clients(), BrainSortKey::Clients);
        let names: Vec<&str> = sorted.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["C", "B", "A", "D"]);
    }

    #[test]
    fn ties_keep_authored_order() {
        let sorted = sorted_brains(&rows_with_missing_clients(), BrainSortKey::Conversations);
        let names: Vec<&str> = sorted.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert_eq!(BrainSortKey::parse("messages"), Some(BrainSortKey::Messages));
        assert_eq!(BrainSortKey::parse("revenue"), None);
    }
}
