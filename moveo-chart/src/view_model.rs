//! Filter state for the dashboard pages.
//!
//! Both page variants own one `DashboardFilters` (wrapped in signals by the
//! UI crate). Nothing is persisted: a reload starts from the defaults.

use crate::bars::VolumeLayout;
use moveo_data::brains::{sorted_brains, BrainSortKey};
use moveo_data::dataset;
use moveo_data::models::{BrainRow, MetricKey, MonthPoint};

/// Rendering of the selected metric in section 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
}

impl ChartMode {
    pub const ALL: [ChartMode; 2] = [ChartMode::Line, ChartMode::Bar];

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Line => "Linha/Área",
            ChartMode::Bar => "Barras",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardFilters {
    pub metric: MetricKey,
    pub chart_mode: ChartMode,
    /// Stacked (true) or paired (false) IA vs human bars.
    pub stacked: bool,
    pub brain_sort: BrainSortKey,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            metric: MetricKey::Containment,
            chart_mode: ChartMode::Line,
            stacked: true,
            brain_sort: BrainSortKey::Conversations,
        }
    }
}

impl DashboardFilters {
    /// Select a metric by its key. Unknown keys leave the selection unchanged.
    pub fn select_metric_key(&mut self, raw: &str) -> bool {
        match MetricKey::parse(raw) {
            Some(metric) => {
                self.metric = metric;
                true
            }
            None => {
                log::warn!("ignoring unknown metric key '{}'", raw);
                false
            }
        }
    }

    /// Select a sort column by its key. Unknown keys leave the order unchanged.
    pub fn select_sort_key(&mut self, raw: &str) -> bool {
        match BrainSortKey::parse(raw) {
            Some(key) => {
                self.brain_sort = key;
                true
            }
            None => {
                log::warn!("ignoring unknown sort key '{}'", raw);
                false
            }
        }
    }

    pub fn volume_layout(&self) -> VolumeLayout {
        VolumeLayout::from_stacked(self.stacked)
    }

    /// Points of the selected metric.
    pub fn metric_points(&self) -> Vec<MonthPoint> {
        dataset::metric_points(self.metric)
    }

    /// `rows` in the selected sort order.
    pub fn sorted_brains(&self, rows: &[BrainRow]) -> Vec<BrainRow> {
        sorted_brains(rows, self.brain_sort)
    }
}
