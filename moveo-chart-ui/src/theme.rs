//! Inline styles shared by the dashboard components.
//!
//! The dashboards ship without a stylesheet; every component styles itself
//! from these constants so both page variants look the same.

pub use moveo_chart::palette::{ACCENT, ACCENT_2, BACKGROUND, BORDER, MUTED, PANEL, TEXT, VOLUME};

pub const FONT_FAMILY: &str = "Manrope, system-ui, -apple-system, 'Segoe UI', sans-serif";

pub const SECTION_CARD: &str = "background: #0f1c2e; border: 1px solid rgba(147, 167, 192, 0.18); border-radius: 18px; padding: 20px 22px; margin-bottom: 20px;";

pub const CHART_SHELL: &str = "background: rgba(255, 255, 255, 0.02); border: 1px solid rgba(147, 167, 192, 0.18); border-radius: 14px; padding: 14px; position: relative; min-width: 0;";

pub const LABEL: &str = "margin: 0 0 12px 0; font-size: 13px; color: #93a7c0;";

pub const LEGEND: &str = "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 10px;";

pub const BADGE: &str = "display: inline-flex; align-items: center; gap: 6px; padding: 4px 10px; border-radius: 999px; background: rgba(147, 167, 192, 0.1); font-size: 12px; color: #e6eef8;";

pub const NOTE: &str = "display: inline-block; margin-bottom: 12px; padding: 6px 12px; border-radius: 10px; background: rgba(244, 192, 118, 0.12); color: #f4c076; font-size: 12px;";

pub const FILTERS_ROW: &str = "display: flex; gap: 18px; flex-wrap: wrap; margin-bottom: 14px;";

pub const FILTER: &str = "display: flex; flex-direction: column; gap: 6px; font-size: 12px; color: #93a7c0;";

pub const PILL_GROUP: &str = "display: flex; gap: 6px; flex-wrap: wrap;";

pub const BAR_GROUP: &str = "display: flex; justify-content: space-around; align-items: flex-end; gap: 10px; padding: 8px 0; position: relative;";

pub const BAR_COLUMN: &str = "display: flex; flex-direction: column; align-items: center;";

pub const BAR_LABEL: &str = "margin-top: 6px; font-size: 12px; color: #93a7c0;";

pub const TOOLTIP: &str = "position: absolute; transform: translate(-50%, -115%); pointer-events: none; display: flex; flex-direction: column; gap: 2px; padding: 8px 10px; border-radius: 10px; background: rgba(7, 17, 31, 0.95); border: 1px solid rgba(125, 208, 255, 0.35); color: #e6eef8; font-size: 12px; white-space: nowrap; z-index: 10;";

pub const KPI: &str = "display: flex; flex-direction: column; gap: 6px; padding: 16px 18px; border-radius: 16px; background: #0f1c2e; border: 1px solid rgba(147, 167, 192, 0.18); min-width: 0;";

pub const TABLE: &str = "width: 100%; border-collapse: collapse; font-size: 13px;";

pub const TABLE_HEAD_CELL: &str = "text-align: left; padding: 10px 8px; color: #93a7c0; font-weight: 600; border-bottom: 1px solid rgba(147, 167, 192, 0.18);";

pub const TABLE_CELL: &str = "padding: 10px 8px; border-bottom: 1px solid rgba(147, 167, 192, 0.08);";

pub const EMPTY_CHART: &str = "display: flex; justify-content: center; align-items: center; min-height: 160px; color: #93a7c0; font-size: 13px;";

/// Root container of a dashboard page.
pub fn page_style(max_width: u32) -> String {
    format!(
        "max-width: {}px; margin: 0 auto; padding: 28px 20px 40px; font-family: {}; background: {}; color: {}; min-height: 100vh;",
        max_width, FONT_FAMILY, BACKGROUND, TEXT
    )
}

/// Grid of `columns` equal columns.
pub fn grid_style(columns: usize, gap: u32) -> String {
    format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}px;",
        columns.max(1),
        gap
    )
}

/// Colored legend dot.
pub fn dot_style(color: &str) -> String {
    format!(
        "display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: {};",
        color
    )
}

/// Toggle button, highlighted when active.
pub fn pill_button_style(active: bool) -> String {
    if active {
        format!(
            "padding: 6px 14px; border-radius: 999px; border: 1px solid {}; background: rgba(125, 208, 255, 0.16); color: {}; font-size: 12px; cursor: pointer;",
            ACCENT, TEXT
        )
    } else {
        format!(
            "padding: 6px 14px; border-radius: 999px; border: 1px solid {}; background: transparent; color: {}; font-size: 12px; cursor: pointer;",
            BORDER, MUTED
        )
    }
}

/// A bar (or stacked segment) of `height` pixels.
pub fn bar_style(color: &str, height: f64, width: u32) -> String {
    format!(
        "height: {}px; width: {}px; background: linear-gradient(180deg, {} 0%, {}99 100%); border-radius: 6px 6px 2px 2px; cursor: pointer; transition: height 0.3s ease;",
        height, width, color, color
    )
}
