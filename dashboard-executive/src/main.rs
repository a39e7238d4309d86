//! Executive dashboard
//!
//! The full report: header, four KPI cards, then the four sections stacked
//! vertically with their charts side by side.
//!
//! All data is compiled in from `moveo-data`. The only state is the filter
//! selection in `DashboardState` (reset on every load) and one tooltip per
//! chart.

use dioxus::prelude::*;
use moveo_chart_ui::sections::{
    BrainSection, EfficiencySection, FooterNote, KpiRow, MaturitySection,
    PeriodComparisonSection, ReportHeader,
};
use moveo_chart_ui::state::DashboardState;
use moveo_chart_ui::theme;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("executive-dashboard-root"))
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

    let page = theme::page_style(1200);

    rsx! {
        div {
            style: "{page}",
            ReportHeader { badge: "Dashboard Executivo" }
            KpiRow { columns: 4 }
            MaturitySection { columns: 2 }
            PeriodComparisonSection { columns: 2 }
            EfficiencySection { columns: 2 }
            BrainSection {}
            FooterNote {}
        }
    }
}
