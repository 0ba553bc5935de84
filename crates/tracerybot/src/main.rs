//! Tracerybot CLI binary.
//!
//! - Run the bot against a Mastodon instance
//! - Preview grammar output without posting
//! - Check that the configured credentials work

use clap::Parser;

mod cli;
mod observability;

use observability::{ObservabilityConfig, init_observability_with_config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate_preview, run_bot, verify_account};

    // Environment overrides for the config file (TRACERYBOT_ACCESS_TOKEN etc.)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot(&cli.config).await?,
        Commands::Generate { symbol, count } => generate_preview(&cli.config, symbol, count)?,
        Commands::Verify => verify_account(&cli.config).await?,
    }

    Ok(())
}
