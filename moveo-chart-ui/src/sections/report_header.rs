//! Page title block.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReportHeaderProps {
    /// First pill above the title (e.g., "Dashboard Executivo")
    pub badge: String,
}

#[component]
pub fn ReportHeader(props: ReportHeaderProps) -> Element {
    let subtitle_style = format!(
        "margin: 0; max-width: 820px; font-size: 15px; line-height: 1.5; color: {};",
        theme::MUTED
    );
    rsx! {
        header {
            style: "margin-bottom: 24px;",
            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 12px;",
                span { style: theme::BADGE, "{props.badge}" }
                span { style: theme::BADGE, "Mar-Jul (Zendesk) vs Jul-Nov (Moveo)" }
            }
            h1 {
                style: "margin: 0 0 10px 0; font-size: 30px;",
                "Evolução e Impacto da IA Moveo"
            }
            p {
                style: "{subtitle_style}",
                "Maturidade do agente de IA, ganho de eficiência operacional e performance comparada ao período anterior, evidenciando que a operação manteve/expandiu volume mesmo com redução drástica de headcount."
            }
        }
    }
}
