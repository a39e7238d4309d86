//! Application state managed via Dioxus context.
//!
//! `DashboardState` bundles the filter signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<DashboardState>()`. Tooltip state is not shared: every
//! chart keeps its own signal.

use dioxus::prelude::*;
use moveo_chart::view_model::{ChartMode, DashboardFilters};
use moveo_data::brains::BrainSortKey;
use moveo_data::models::MetricKey;

/// Shared filter state for one dashboard page.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Metric shown in section 1
    pub metric: Signal<MetricKey>,
    /// Line/area or bar rendering of that metric
    pub chart_mode: Signal<ChartMode>,
    /// Stacked (true) or paired IA vs human bars
    pub stacked: Signal<bool>,
    /// Sort column of the brain table
    pub brain_sort: Signal<BrainSortKey>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self::from_filters(DashboardFilters::default())
    }

    pub fn from_filters(filters: DashboardFilters) -> Self {
        Self {
            metric: Signal::new(filters.metric),
            chart_mode: Signal::new(filters.chart_mode),
            stacked: Signal::new(filters.stacked),
            brain_sort: Signal::new(filters.brain_sort),
        }
    }

    /// Snapshot of the current selections. Subscribes the caller to all of them.
    pub fn filters(&self) -> DashboardFilters {
        DashboardFilters {
            metric: (self.metric)(),
            chart_mode: (self.chart_mode)(),
            stacked: (self.stacked)(),
            brain_sort: (self.brain_sort)(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
