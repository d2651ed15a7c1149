//! Main entry point for the dunning renderer.

use anyhow::{Context, Result};
use clap::Parser;
use dunning_cli::{render, Cli};
use dunning_common::init_logging;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = cli.config_loader();
    let mut config = loader
        .load()
        .with_context(|| format!("Failed to load configuration from {}", loader.path().display()))?;

    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    init_logging(&config.logging).map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    info!(config = %loader.path().display(), "Configuration loaded");

    let output = render(&cli, &config)
        .with_context(|| format!("Failed to render {}", cli.data.display()))?;
    println!("{output}");

    Ok(())
}
