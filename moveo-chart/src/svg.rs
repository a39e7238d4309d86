//! Standalone SVG documents for report exports.
//!
//! Draws the same geometry as the web components, minus the hover markers'
//! interactivity, so a chart can be pasted into a slide deck.

use crate::dual_scale::DualScaleLayout;
use crate::line::LineAreaLayout;
use crate::palette;
use crate::scale::PlotFrame;
use crate::series::ScaledSeries;
use std::fmt::Write;

const MARKER_RADIUS: f64 = 5.0;

/// A line/area chart with the primary stroke in `color`.
pub fn line_area_svg(layout: &LineAreaLayout, color: &str) -> String {
    let mut svg = open_svg(&layout.frame);
    gradient(&mut svg, "area", color, palette::AREA_OPACITY);
    path(&mut svg, &layout.area_path, "url(#area)", "none", 0.0, None);
    path(&mut svg, &layout.primary.path, "none", color, 3.0, None);
    if let Some(secondary) = &layout.secondary {
        path(&mut svg, &secondary.path, "none", palette::ACCENT_2, 2.5, Some("6 6"));
    }
    markers(&mut svg, &layout.primary, color);
    labels(&mut svg, &layout.primary);
    svg.push_str("</svg>\n");
    svg
}

/// Volume area and solid stroke with a dashed headcount overlay.
pub fn dual_scale_svg(layout: &DualScaleLayout) -> String {
    let mut svg = open_svg(&layout.frame);
    gradient(&mut svg, "volume", palette::VOLUME, palette::VOLUME_AREA_OPACITY);
    path(&mut svg, &layout.volume_area, "url(#volume)", "none", 0.0, None);
    path(&mut svg, &layout.volume.path, "none", palette::VOLUME, 3.0, None);
    path(&mut svg, &layout.headcount.path, "none", palette::ACCENT_2, 3.0, Some("6 6"));
    markers(&mut svg, &layout.volume, palette::VOLUME);
    markers(&mut svg, &layout.headcount, palette::ACCENT_2);
    labels(&mut svg, &layout.volume);
    svg.push_str("</svg>\n");
    svg
}

fn open_svg(frame: &PlotFrame) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}" role="img">"#,
        frame.width,
        frame.height,
        frame.view_box()
    );
    let _ = writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        palette::PANEL
    );
    svg
}

fn gradient(svg: &mut String, id: &str, color: &str, opacity: f64) {
    let _ = writeln!(
        svg,
        r#"<defs><linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{color}" stop-opacity="{opacity}"/><stop offset="100%" stop-color="{color}" stop-opacity="0"/></linearGradient></defs>"#
    );
}

fn path(svg: &mut String, d: &str, fill: &str, stroke: &str, width: f64, dash: Option<&str>) {
    let _ = write!(svg, r#"<path d="{}" fill="{}" stroke="{}""#, d, fill, stroke);
    if width > 0.0 {
        let _ = write!(svg, r#" stroke-width="{}" stroke-linecap="round""#, width);
    }
    if let Some(dash) = dash {
        let _ = write!(svg, r#" stroke-dasharray="{}""#, dash);
    }
    svg.push_str("/>\n");
}

fn markers(svg: &mut String, series: &ScaledSeries, color: &str) {
    for p in &series.points {
        let _ = writeln!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            p.x,
            p.y,
            MARKER_RADIUS,
            color,
            palette::PANEL
        );
    }
}

fn labels(svg: &mut String, series: &ScaledSeries) {
    for label in &series.labels {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" fill="{}" font-size="11" text-anchor="middle">{}</text>"#,
            label.x,
            label.y,
            palette::MUTED,
            escape(label.text)
        );
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{DUAL_SCALE_FRAME, LINE_FRAME};
    use moveo_data::dataset;
    use moveo_data::models::{MetricKey, MonthPoint};

    #[test]
    fn line_svg_contains_layout_paths() {
        let points = dataset::metric_points(MetricKey::Containment);
        let layout = LineAreaLayout::compute(LINE_FRAME, &points, None).unwrap();
        let svg = line_area_svg(&layout, palette::ACCENT);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 700 210""#));
        assert!(svg.contains(&layout.primary.path));
        assert!(svg.contains(&layout.area_path));
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(svg.contains(">Nov</text>"));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn overlay_is_dashed() {
        let primary = dataset::metric_points(MetricKey::Containment);
        let overlay = dataset::metric_points(MetricKey::Coverage);
        let layout = LineAreaLayout::compute(LINE_FRAME, &primary, Some(&overlay)).unwrap();
        let svg = line_area_svg(&layout, palette::ACCENT);
        assert_eq!(svg.matches(r#"stroke-dasharray="6 6""#).count(), 1);
    }

    #[test]
    fn dual_scale_svg_draws_both_series() {
        let layout = DualScaleLayout::compute(
            DUAL_SCALE_FRAME,
            dataset::TOTAL_VOLUMES,
            dataset::HEADCOUNT_BY_MONTH,
        )
        .unwrap();
        let svg = dual_scale_svg(&layout);
        assert_eq!(svg.matches("<circle").count(), 16);
        assert!(svg.contains(&layout.headcount.path));
        assert!(svg.contains("url(#volume)"));
    }

    #[test]
    fn labels_are_escaped() {
        let points = [MonthPoint::new("Q1 & Q2", 4.0)];
        let layout = LineAreaLayout::compute(LINE_FRAME, &points, None).unwrap();
        let svg = line_area_svg(&layout, palette::ACCENT);
        assert!(svg.contains("Q1 &amp; Q2"));
    }
}
