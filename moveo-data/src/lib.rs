//! Static dataset and record types for the Moveo executive dashboard.
//!
//! Every figure shown on the dashboard is hand-entered for a single client
//! engagement and compiled into the binary. There is nothing to load at
//! runtime: consuming crates borrow the constants in [`dataset`] directly.
//!
//! # Modules
//!
//! - [`models`]: record types (`MonthPoint`, `DualPoint`, `PeriodSummary`, `BrainRow`, ...)
//! - [`dataset`]: the hand-entered series for the engagement
//! - [`kpi`]: headline figures derived from the series
//! - [`brains`]: sorting for the per-brain usage table
//!
//! # Usage
//!
//! ```rust
//! use moveo_data::dataset;
//! use moveo_data::models::MetricKey;
//!
//! let containment = dataset::monthly_metric(MetricKey::Containment);
//! assert_eq!(containment.len(), 5);
//! assert_eq!(containment.last().map(|p| p.value), Some(62.0));
//! ```

pub mod brains;
pub mod dataset;
pub mod kpi;
pub mod models;
