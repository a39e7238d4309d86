//! Headline number card.

use crate::theme;
use dioxus::prelude::*;
use moveo_chart::cards::CardText;

#[derive(Props, Clone, PartialEq)]
pub struct KpiCardProps {
    pub card: CardText,
    /// Background override (e.g., a translucent accent)
    #[props(default = String::new())]
    pub tint: String,
}

/// Caption, large value and a delta line.
#[component]
pub fn KpiCard(props: KpiCardProps) -> Element {
    let style = if props.tint.is_empty() {
        theme::KPI.to_string()
    } else {
        format!("{} background: {};", theme::KPI, props.tint)
    };
    let value_style = format!("font-size: 22px; color: {};", theme::TEXT);
    let label_style = format!("font-size: 12px; color: {};", theme::MUTED);
    let detail_style = format!("font-size: 12px; color: {};", theme::ACCENT_2);

    rsx! {
        div {
            style: "{style}",
            small {
                style: "{label_style}",
                "{props.card.label}"
            }
            strong {
                style: "{value_style}",
                "{props.card.value}"
            }
            span {
                style: "{detail_style}",
                "{props.card.detail}"
            }
        }
    }
}
