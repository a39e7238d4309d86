//! Tooltip box and the hover plumbing shared by every chart.

use crate::dom;
use crate::theme;
use dioxus::prelude::*;
use moveo_chart::tooltip::{MarkerId, Tooltip, TooltipInsets, TooltipState};

#[derive(Props, Clone, PartialEq)]
pub struct TooltipBubbleProps {
    pub tooltip: Tooltip,
}

/// The floating box: label in bold, formatted value below.
#[component]
pub fn TooltipBubble(props: TooltipBubbleProps) -> Element {
    let style = format!("{} {}", theme::TOOLTIP, props.tooltip.position.css());
    rsx! {
        div {
            style: "{style}",
            strong { "{props.tooltip.label}" }
            span { "{props.tooltip.value}" }
        }
    }
}

/// Show `tooltip` in the chart owning `state`.
pub(crate) fn show(mut state: Signal<TooltipState>, tooltip: Tooltip) {
    state.write().show(tooltip);
}

/// Hide the chart's tooltip if it still belongs to `anchor`.
pub(crate) fn hide(mut state: Signal<TooltipState>, anchor: MarkerId) {
    state.write().hide(anchor);
}

/// Tooltip content of one bar, anchored at the pointer when hovered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarHover {
    /// DOM id of the element the pointer position is measured against.
    pub container: String,
    pub anchor: MarkerId,
    pub insets: TooltipInsets,
    pub label: String,
    pub value: String,
}

impl BarHover {
    pub(crate) fn enter(&self, state: Signal<TooltipState>, evt: &MouseEvent) {
        let Some(rect) = dom::container_rect(&self.container) else {
            return;
        };
        let pointer = evt.client_coordinates();
        show(
            state,
            Tooltip {
                anchor: self.anchor,
                position: rect.clamp_pointer(pointer.x, pointer.y, self.insets),
                label: self.label.clone(),
                value: self.value.clone(),
            },
        );
    }

    pub(crate) fn leave(&self, state: Signal<TooltipState>) {
        hide(state, self.anchor);
    }
}
