//! Command implementations for the Moveo dashboard CLI.
//!
//! Prints the report figures in the terminal, exports the dataset as CSV or
//! JSON, and writes standalone SVG snapshots of the charts.

use clap::Subcommand;

pub mod brains;
pub mod export;
pub mod render;
pub mod summary;

pub use export::{Dataset, ExportFormat};

#[derive(Subcommand)]
pub enum Command {
    /// Print the KPI cards, the period comparison and the ROI figures
    Summary,

    /// Print the brain table
    Brains {
        /// Sort column: conversations, messages or clients
        #[arg(short = 's', long, default_value = "conversations")]
        sort_by: String,
    },

    /// Export one dataset as CSV or JSON
    Export {
        #[arg(short = 'd', long, value_enum)]
        dataset: Dataset,

        #[arg(short = 'f', long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Write a line/area chart of one metric as SVG
    Svg {
        /// Metric key: containment, coverage or meaningful
        #[arg(short = 'm', long)]
        metric: String,

        /// Output path for the SVG file
        #[arg(short = 'o', long)]
        output: String,

        /// Second metric drawn as a dashed line on the same scale
        #[arg(long)]
        overlay: Option<String>,
    },

    /// Write the volume vs headcount chart as SVG
    SvgHeadcount {
        /// Output path for the SVG file
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary => summary::run_summary(),
        Command::Brains { sort_by } => brains::run_brains(&sort_by),
        Command::Export {
            dataset,
            format,
            output,
        } => export::run_export(dataset, format, output.as_deref()),
        Command::Svg {
            metric,
            output,
            overlay,
        } => render::run_metric_svg(&metric, overlay.as_deref(), &output),
        Command::SvgHeadcount { output } => render::run_headcount_svg(&output),
    }
}
