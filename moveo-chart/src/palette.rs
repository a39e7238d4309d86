//! Chart colors, shared by the web components and the SVG exports.

/// Primary accent: IA series, active metric.
pub const ACCENT: &str = "#7dd0ff";
/// Secondary accent: human series, headcount, dashed overlays.
pub const ACCENT_2: &str = "#9ef0c9";
/// Total volume.
pub const VOLUME: &str = "#f4c076";
/// Axis labels and captions.
pub const MUTED: &str = "#93a7c0";
/// Card background, also used as marker outline.
pub const PANEL: &str = "#0f1c2e";
pub const BACKGROUND: &str = "#07111f";
pub const TEXT: &str = "#e6eef8";
pub const BORDER: &str = "rgba(147, 167, 192, 0.18)";

/// Gradient opacity at the top of the line chart area.
pub const AREA_OPACITY: f64 = 0.35;
/// Gradient opacity at the top of the volume area.
pub const VOLUME_AREA_OPACITY: f64 = 0.4;
