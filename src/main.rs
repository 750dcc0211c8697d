use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use kingside_play::{Cli, Console, TurnController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config().context("invalid session settings")?;
    info!(depth = config.depth(), "kingside starting");

    let stdin = io::stdin();
    let mut console = Console::new(TurnController::new(config), io::stdout());
    console.run(stdin.lock()).context("console failed")?;
    Ok(())
}
