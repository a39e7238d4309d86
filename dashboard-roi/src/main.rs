//! ROI dashboard
//!
//! Same sections and filters as the executive dashboard, led by the ROI
//! cards. The sections sit in a two-column page grid, each with its charts
//! stacked in a single column.

use dioxus::prelude::*;
use moveo_chart_ui::sections::{
    BrainSection, EfficiencySection, FooterNote, KpiRow, MaturitySection,
    PeriodComparisonSection, ReportHeader, RoiSummary,
};
use moveo_chart_ui::state::DashboardState;
use moveo_chart_ui::theme;

/// Charts per row inside each section.
const SECTION_COLUMNS: usize = 1;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("roi-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(DashboardState::new);

    use_effect(move || {
        let filters = state.filters();
        log::info!(
            "filters: metric={} mode={} stacked={} sort={}",
            filters.metric,
            filters.chart_mode.label(),
            filters.stacked,
            filters.brain_sort.key()
        );
    });

    let page = theme::page_style(1400);
    let sections = theme::grid_style(2, 20);

    rsx! {
        div {
            style: "{page}",
            ReportHeader { badge: "Resumo de ROI" }
            RoiSummary { columns: 4 }
            KpiRow { columns: 4 }
            div {
                style: "{sections}",
                MaturitySection { columns: SECTION_COLUMNS }
                PeriodComparisonSection { columns: SECTION_COLUMNS }
                EfficiencySection { columns: SECTION_COLUMNS }
                BrainSection {}
            }
            FooterNote {}
        }
    }
}
