use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "caravel")]
#[command(about = "Migration replica orchestration CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service URL (overrides CARAVEL_API_URL and config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Auth token (overrides CARAVEL_API_TOKEN and config.toml)
    #[arg(long, global = true)]
    pub token: Option<String>,
}
