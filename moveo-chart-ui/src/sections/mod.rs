//! Report sections composed from the chart components.
//!
//! Both dashboard variants render the same sections; only the page layout
//! around them and the `columns` of their inner grids differ.

mod brain_section;
mod efficiency_section;
mod footer_note;
mod kpi_row;
mod maturity_section;
mod period_comparison_section;
mod report_header;
mod roi_summary;

pub use brain_section::BrainSection;
pub use efficiency_section::EfficiencySection;
pub use footer_note::FooterNote;
pub use kpi_row::KpiRow;
pub use maturity_section::MaturitySection;
pub use period_comparison_section::PeriodComparisonSection;
pub use report_header::ReportHeader;
pub use roi_summary::RoiSummary;
