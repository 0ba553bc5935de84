//! Bot controller for posting generated toots and answering mentions.
//!
//! - **BotController**: one cycle of the state machine (maybe toot, then
//!   process notifications) over explicit [`BotState`]
//! - **Synthesizer**: length-bounded text generation with a retry budget
//! - **BotServer**: the driver that repeats cycles with a fixed sleep

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod controller;
mod metrics;
mod server;
mod synthesis;

pub use config::{BotConfig, BotSchedule};
pub use controller::{BotController, BotState, CycleReport, PassOutcome, TootOutcome};
pub use metrics::{BotMetrics, MetricsSnapshot};
pub use server::BotServer;
pub use synthesis::{
    DEFAULT_MAX_ATTEMPTS, MAX_STATUS_CHARS, RetryOutcome, SynthesisPolicy, Synthesizer,
    retry_until,
};
