use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dermacast_core::Config;

/// Weather-driven skin care recommendations
#[derive(Debug, Parser)]
#[command(name = "dermacast", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize core
    dermacast_core::init()?;

    let (mut config, _warnings) = Config::load_validated(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Missing credential is fatal: the page never comes up without it
    let config_dir = match &cli.config {
        Some(path) => path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => Config::config_dir()?,
    };
    let credential = dermacast_core::load_credential(&config_dir)
        .context("Weather API key not configured")?;

    tracing::info!("Dermacast starting");

    dermacast_web::run(config, credential)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e, e.user_message()))
}
