//! Moveo CLI - print, export and snapshot the executive dashboard figures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "moveo-cli",
    version,
    about = "Moveo executive dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: moveo_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting moveo-cli");
    moveo_cmd::run(cli.command)
}
