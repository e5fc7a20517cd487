//! Lagrange CLI binary.
//!
//! - `run` connects to Discord and serves the cogs
//! - `check-config` validates configuration
//! - `fetch` pulls one image from waifu.im

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_config, fetch_one, run_bot};

    // Pick up LAGRANGE_* variables from .env before reading configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    lagrange::init_logging(cli.verbose, cli.json_logs)?;

    match cli.command {
        Commands::Run { config } => {
            run_bot(config.as_deref()).await?;
        }

        Commands::CheckConfig { config } => {
            check_config(config.as_deref())?;
        }

        Commands::Fetch { config } => {
            fetch_one(config.as_deref()).await?;
        }
    }

    Ok(())
}
