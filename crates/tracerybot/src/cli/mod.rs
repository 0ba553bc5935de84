//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tracerybot binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{generate_preview, run_bot, verify_account};
