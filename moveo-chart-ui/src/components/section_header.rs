//! Section header with title and a short description line.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title (e.g., "Seção 3 — Eficiência Operacional")
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

/// Title row of a report section.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let title_style = format!("margin: 0 0 6px 0; font-size: 19px; color: {};", theme::TEXT);
    rsx! {
        div {
            h2 {
                style: "{title_style}",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: theme::LABEL,
                    "{props.description}"
                }
            }
        }
    }
}
