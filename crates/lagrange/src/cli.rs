//! Command-line interface definitions and subcommand handlers.

use clap::{Parser, Subcommand};
use lagrange::LagrangeConfig;
use lagrange_discord::LagrangeBot;
use lagrange_waifu::{WaifuImClient, WaifuSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Lagrange Discord bot.
#[derive(Debug, Parser)]
#[command(name = "lagrange", version, about)]
pub struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect to Discord and serve commands until Ctrl+C
    Run {
        /// Configuration file (defaults to ./lagrange.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Load and validate configuration, then print it with tokens hidden
    CheckConfig {
        /// Configuration file (defaults to ./lagrange.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Fetch one image from waifu.im and print it as JSON
    Fetch {
        /// Configuration file (defaults to ./lagrange.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn waifu_client(config: &LagrangeConfig) -> Result<WaifuImClient, Box<dyn std::error::Error>> {
    Ok(WaifuImClient::with_base_url(
        config.waifu().token().clone(),
        config.waifu().base_url().clone(),
    )?)
}

/// Runs the bot.
#[instrument(skip_all)]
pub async fn run_bot(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = LagrangeConfig::load(path)?;
    config.validate()?;

    let source = WaifuSource::new(waifu_client(&config)?);
    let mut bot = LagrangeBot::new(
        config.discord().token().clone(),
        Arc::new(source),
        config.widget_timeout(),
    )
    .await?;

    bot.start().await?;
    info!("Shutdown complete");
    Ok(())
}

/// Validates configuration and prints the redacted result.
pub fn check_config(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = LagrangeConfig::load(path)?;
    let shown = serde_json::to_string_pretty(&config.redacted())?;
    println!("{}", shown);

    config.validate()?;
    println!("Configuration OK");
    Ok(())
}

/// Fetches one item and prints it.
#[instrument(skip_all)]
pub async fn fetch_one(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = LagrangeConfig::load(path)?;
    let item = waifu_client(&config)?.fetch_item().await?;
    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
