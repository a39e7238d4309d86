//! Scaling and layout geometry for the Moveo dashboard charts.
//!
//! Everything in this crate is a pure function of its inputs: the Dioxus
//! components in `moveo-chart-ui` and the SVG snapshots written by the CLI
//! both draw from the same layouts, so a chart looks identical in either.
//!
//! - `scale`: plot frames and value scales (value -> pixel)
//! - `series`: one series projected onto a frame, with its SVG path
//! - `line`: line/area chart with optional dashed overlay
//! - `cards`: KPI and ROI card text
//! - `bars`: single, paired, stacked and period-comparison bar heights
//! - `dual_scale`: two series with independent maxima on one canvas
//! - `tooltip`: exclusive tooltip state and container clamping
//! - `view_model`: filter state shared by both dashboard variants
//! - `palette`: chart colors
//! - `svg`: standalone SVG rendering for exports

pub mod bars;
pub mod cards;
pub mod dual_scale;
pub mod line;
pub mod palette;
pub mod scale;
pub mod series;
pub mod svg;
pub mod tooltip;
pub mod view_model;
