use crate::SynthesisPolicy;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracerybot_error::{ConfigError, TracerybotResult};
use tracing::{debug, instrument};

/// Prefix for environment variables that override file settings
/// (e.g., `TRACERYBOT_ACCESS_TOKEN`).
pub const ENV_PREFIX: &str = "TRACERYBOT";

/// Configuration for the bot.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Instance URL (e.g., "https://botsin.space")
    pub base_url: String,
    /// OAuth application client id
    pub client_id: String,
    /// OAuth application client secret
    pub client_secret: String,
    /// OAuth access token for the bot account
    pub access_token: String,
    /// Cycles between original posts
    pub post_interval: u32,
    /// Path to the JSON grammar
    pub grammar_file: PathBuf,
    /// Sleep between cycles (seconds)
    #[serde(default = "default_cycle_interval_seconds")]
    pub cycle_interval_seconds: u64,
    /// Grammar symbol expanded for original posts
    #[serde(default = "default_toot_symbol")]
    pub toot_symbol: String,
    /// Grammar symbol expanded for replies
    #[serde(default = "default_reply_symbol")]
    pub reply_symbol: String,
    /// Generator calls allowed per post
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Longest acceptable post, in characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_cycle_interval_seconds() -> u64 {
    60
}

fn default_toot_symbol() -> String {
    "toot".to_string()
}

fn default_reply_symbol() -> String {
    "reply".to_string()
}

fn default_max_attempts() -> u32 {
    crate::DEFAULT_MAX_ATTEMPTS
}

fn default_max_chars() -> usize {
    crate::MAX_STATUS_CHARS
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("post_interval", &self.post_interval)
            .field("grammar_file", &self.grammar_file)
            .field("cycle_interval_seconds", &self.cycle_interval_seconds)
            .field("toot_symbol", &self.toot_symbol)
            .field("reply_symbol", &self.reply_symbol)
            .field("max_attempts", &self.max_attempts)
            .field("max_chars", &self.max_chars)
            .finish()
    }
}

impl BotConfig {
    /// Load bot configuration from a JSON or TOML file, with
    /// `TRACERYBOT_*` environment variables taking precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result fails [`BotConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TracerybotResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> TracerybotResult<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::new(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            ))
            .into());
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::new("access_token must not be empty").into());
        }
        if self.post_interval == 0 {
            return Err(ConfigError::new("post_interval must be positive").into());
        }
        if self.cycle_interval_seconds == 0 {
            return Err(ConfigError::new("cycle_interval_seconds must be positive").into());
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be positive").into());
        }
        if self.max_chars == 0 {
            return Err(ConfigError::new("max_chars must be positive").into());
        }
        if self.toot_symbol.is_empty() || self.reply_symbol.is_empty() {
            return Err(ConfigError::new("toot_symbol and reply_symbol must not be empty").into());
        }
        Ok(())
    }

    /// Attempt budget and length limit for generated posts.
    pub fn synthesis_policy(&self) -> SynthesisPolicy {
        SynthesisPolicy {
            max_attempts: self.max_attempts,
            max_chars: self.max_chars,
        }
    }
}

/// Bot pacing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSchedule {
    /// Cycles between original posts
    pub post_interval: u32,
    /// Sleep between cycles
    pub cycle_interval: Duration,
}

impl Default for BotSchedule {
    fn default() -> Self {
        Self {
            post_interval: 1,
            cycle_interval: Duration::from_secs(default_cycle_interval_seconds()),
        }
    }
}

impl From<&BotConfig> for BotSchedule {
    fn from(config: &BotConfig) -> Self {
        Self {
            post_interval: config.post_interval,
            cycle_interval: Duration::from_secs(config.cycle_interval_seconds),
        }
    }
}
