//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tracerybot - Mastodon bot driven by a Tracery-style grammar
#[derive(Parser, Debug)]
#[command(name = "tracerybot")]
#[command(about = "Mastodon bot driven by a Tracery-style grammar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the JSON or TOML configuration file
    #[arg(short, long, global = true, env = "TRACERYBOT_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toot and reply to mentions until stopped
    Run,

    /// Print generated text without posting
    Generate {
        /// Grammar symbol to expand (defaults to the configured toot symbol)
        #[arg(long)]
        symbol: Option<String>,

        /// Number of samples
        #[arg(long, default_value_t = 5)]
        count: u32,
    },

    /// Check the configured credentials against the instance
    Verify,
}
