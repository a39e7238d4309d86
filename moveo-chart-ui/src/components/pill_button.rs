//! Toggle button used by the filter groups.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PillButtonProps {
    pub label: String,
    pub active: bool,
    pub onclick: EventHandler<MouseEvent>,
}

#[component]
pub fn PillButton(props: PillButtonProps) -> Element {
    let style = theme::pill_button_style(props.active);
    let onclick = props.onclick;
    rsx! {
        button {
            r#type: "button",
            style: "{style}",
            onclick: move |evt| onclick.call(evt),
            "{props.label}"
        }
    }
}
