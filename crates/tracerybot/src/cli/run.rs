//! Command handlers.

use std::path::Path;
use std::sync::Arc;
use tracerybot_bot::{
    BotConfig, BotController, BotSchedule, BotServer, RetryOutcome, Synthesizer,
};
use tracerybot_error::TracerybotResult;
use tracerybot_grammar::GrammarGenerator;
use tracerybot_interface::PlatformClient;
use tracerybot_mastodon::MastodonClient;
use tracing::{error, info, instrument, warn};

fn load(config_path: &Path) -> TracerybotResult<(BotConfig, Arc<GrammarGenerator>)> {
    let config = BotConfig::from_file(config_path)?;
    info!(config = ?config, "Loaded configuration");
    let generator = GrammarGenerator::from_file(&config.grammar_file)?;
    Ok((config, Arc::new(generator)))
}

/// Log the account the bot runs as.
///
/// A failed check is logged and the run continues.
async fn announce_account<P: PlatformClient>(platform: &P) -> Option<String> {
    match platform.verify_credentials().await {
        Ok(account) => {
            info!(account = %account, platform = platform.platform_name(), "Authenticated");
            Some(account)
        }
        Err(e) => {
            warn!(error = %e, "Could not verify credentials, starting anyway");
            None
        }
    }
}

/// Run the bot until a fatal error or Ctrl-C.
#[instrument(skip(config_path), fields(config = %config_path.display()))]
pub async fn run_bot(config_path: &Path) -> TracerybotResult<()> {
    let (config, generator) = load(config_path)?;

    let platform = Arc::new(MastodonClient::new(&config.base_url, &config.access_token)?);
    announce_account(platform.as_ref()).await;

    let synthesizer = Synthesizer::new(
        generator,
        config.synthesis_policy(),
        &config.toot_symbol,
        &config.reply_symbol,
    );
    let schedule = BotSchedule::from(&config);
    let controller = BotController::new(platform, synthesizer, schedule.post_interval);

    BotServer::new(controller, schedule.cycle_interval)
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await
}

/// Print `count` samples of `symbol` (default: the toot symbol), applying
/// the same length check as live posting.
pub fn generate_preview(
    config_path: &Path,
    symbol: Option<String>,
    count: u32,
) -> TracerybotResult<()> {
    let (config, generator) = load(config_path)?;
    let symbol = symbol.unwrap_or_else(|| config.toot_symbol.clone());
    let synthesizer = Synthesizer::new(
        generator,
        config.synthesis_policy(),
        &symbol,
        &config.reply_symbol,
    );

    for _ in 0..count {
        match synthesizer.compose_toot() {
            RetryOutcome::Accepted { value, .. } => println!("{}", value),
            RetryOutcome::Exhausted { attempts } => eprintln!(
                "(no text within {} characters after {} attempts)",
                synthesizer.policy().max_chars,
                attempts
            ),
        }
    }

    Ok(())
}

/// Check the configured credentials and print the account handle.
pub async fn verify_account(config_path: &Path) -> TracerybotResult<()> {
    let config = BotConfig::from_file(config_path)?;
    let platform = MastodonClient::new(&config.base_url, &config.access_token)?;
    let account = platform.verify_credentials().await?;
    println!("Authenticated as @{} on {}", account, platform.base_url());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_instance_does_not_stop_startup() {
        // Nothing listens on the discard port.
        let platform = MastodonClient::new("http://127.0.0.1:9", "token").expect("client builds");
        assert_eq!(announce_account(&platform).await, None);
    }
}
