use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn FooterNote() -> Element {
    let style = format!("margin-top: 12px; font-size: 12px; color: {};", theme::MUTED);
    rsx! {
        footer {
            style: "{style}",
            "Dados baseados em dados.csv (linhas 3-31). Ajuste CSAT e cérebros quando os valores reais estiverem disponíveis."
        }
    }
}
