//! Placeholder for charts without data.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyChartProps {
    #[props(default = "Sem dados para exibir".to_string())]
    pub message: String,
}

/// Shown instead of a chart whose series is empty.
#[component]
pub fn EmptyChart(props: EmptyChartProps) -> Element {
    rsx! {
        div {
            style: theme::EMPTY_CHART,
            "{props.message}"
        }
    }
}
