//! Standalone SVG snapshots of the dashboard charts.

use anyhow::Context;
use moveo_chart::dual_scale::DualScaleLayout;
use moveo_chart::line::LineAreaLayout;
use moveo_chart::palette;
use moveo_chart::scale::{DUAL_SCALE_FRAME, LINE_FRAME};
use moveo_chart::svg::{dual_scale_svg, line_area_svg};
use moveo_data::dataset;
use moveo_data::models::MetricKey;

/// Write the line/area chart of `metric`, optionally with a dashed overlay.
pub fn run_metric_svg(metric: &str, overlay: Option<&str>, output: &str) -> anyhow::Result<()> {
    let svg = metric_svg(metric, overlay)?;
    std::fs::write(output, svg).with_context(|| format!("Failed to write {}", output))?;
    log::info!("Wrote {} chart to {}", metric, output);
    Ok(())
}

/// Write the volume vs headcount chart.
pub fn run_headcount_svg(output: &str) -> anyhow::Result<()> {
    let svg = headcount_svg()?;
    std::fs::write(output, svg).with_context(|| format!("Failed to write {}", output))?;
    log::info!("Wrote volume vs headcount chart to {}", output);
    Ok(())
}

/// SVG markup of one metric. Unknown keys are errors here, unlike in the
/// dashboard where they are ignored.
pub fn metric_svg(metric: &str, overlay: Option<&str>) -> anyhow::Result<String> {
    let key: MetricKey = metric.parse()?;
    let primary = dataset::metric_points(key);
    let overlay = overlay
        .map(|raw| raw.parse::<MetricKey>().map(dataset::metric_points))
        .transpose()?;
    let layout = LineAreaLayout::compute(LINE_FRAME, &primary, overlay.as_deref())?;
    Ok(line_area_svg(&layout, palette::ACCENT))
}

pub fn headcount_svg() -> anyhow::Result<String> {
    let layout = DualScaleLayout::compute(
        DUAL_SCALE_FRAME,
        dataset::TOTAL_VOLUMES,
        dataset::HEADCOUNT_BY_MONTH,
    )?;
    Ok(dual_scale_svg(&layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_svg_has_five_markers() {
        let svg = metric_svg("meaningful", None).unwrap();
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_overlay_adds_dashed_line() {
        let svg = metric_svg("containment", Some("coverage")).unwrap();
        assert!(svg.contains(r#"stroke-dasharray="6 6""#));
    }

    #[test]
    fn test_unknown_metric_is_an_error() {
        let err = metric_svg("csat", None).unwrap_err();
        assert!(err.to_string().contains("unknown key 'csat'"));
        assert!(metric_svg("containment", Some("nps")).is_err());
    }

    #[test]
    fn test_headcount_svg() {
        let svg = headcount_svg().unwrap();
        assert!(svg.contains(r#"viewBox="0 0 700 230""#));
        assert_eq!(svg.matches("<circle").count(), 16);
    }

    #[test]
    fn test_svg_written_to_file() {
        let path = std::env::temp_dir().join(format!("moveo-svg-{}.svg", std::process::id()));
        let path_str = path.to_str().unwrap().to_string();
        run_headcount_svg(&path_str).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        std::fs::remove_file(&path).unwrap();
    }
}
