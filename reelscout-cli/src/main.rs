//! Reelscout CLI - Command-line interface
//!
//! Serves the search UI and the metrics service, and runs one-shot catalog
//! and trending queries from the terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use reelscout_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(about = "Movie search with debounced catalog queries and trending searches")]
struct Cli {
    /// Console log level; RUST_LOG overrides it
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,

    /// Directory for the last-run trace log
    #[arg(long, default_value = "logs", global = true)]
    logs_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), Some(&cli.logs_dir))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    commands::handle_command(cli.command).await
}
