//! Reusable Dioxus RSX components for the Moveo dashboards.

mod brain_sort_selector;
mod brain_table;
mod chart_mode_toggle;
mod dual_bar_chart;
mod empty_chart;
mod kpi_card;
mod legend;
mod line_area_chart;
mod metric_bar_chart;
mod metric_selector;
mod period_comparison_chart;
mod pill_button;
mod section_header;
mod stacked_bar_chart;
mod stacked_toggle;
mod tooltip_bubble;
mod volume_headcount_chart;

pub use brain_sort_selector::BrainSortSelector;
pub use brain_table::BrainTable;
pub use chart_mode_toggle::ChartModeToggle;
pub use dual_bar_chart::DualBarChart;
pub use empty_chart::EmptyChart;
pub use kpi_card::KpiCard;
pub use legend::{Legend, LegendEntry};
pub use line_area_chart::LineAreaChart;
pub use metric_bar_chart::MetricBarChart;
pub use metric_selector::MetricSelector;
pub use period_comparison_chart::PeriodComparisonChart;
pub use pill_button::PillButton;
pub use section_header::SectionHeader;
pub use stacked_bar_chart::StackedBarChart;
pub use stacked_toggle::StackedToggle;
pub use tooltip_bubble::TooltipBubble;
pub use volume_headcount_chart::VolumeVsHeadcountChart;
