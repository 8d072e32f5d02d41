//! Solar CLI - point suitability reports from a sampled insolation value.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "solar-cli",
    version,
    about = "Solar suitability point report toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: solar_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    solar_cmd::run(cli.command)
}
