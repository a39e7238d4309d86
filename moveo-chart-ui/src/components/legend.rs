//! Legend badges above a chart.

use crate::theme;
use dioxus::prelude::*;

/// One colored badge.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LegendProps {
    pub entries: Vec<LegendEntry>,
}

#[component]
pub fn Legend(props: LegendProps) -> Element {
    rsx! {
        div {
            style: theme::LEGEND,
            for entry in props.entries.iter() {
                span {
                    key: "{entry.label}",
                    style: theme::BADGE,
                    span { style: theme::dot_style(&entry.color) }
                    "{entry.label}"
                }
            }
        }
    }
}
