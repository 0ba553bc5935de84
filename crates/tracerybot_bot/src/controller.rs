//! The per-cycle state machine.

use crate::{BotMetrics, RetryOutcome, Synthesizer};
use serde::Serialize;
use std::sync::Arc;
use tracerybot_core::{Cursor, Notification, PostedStatus, StatusPost};
use tracerybot_error::{ApiError, TracerybotResult};
use tracerybot_interface::{NotificationFetch, PlatformClient, TextGenerator};
use tracing::{debug, error, info, instrument, warn};

/// Mutable controller state carried from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BotState {
    /// Highest notification id already handled
    pub cursor: Cursor,
    /// Cycles until the next original post; due when `<= 0`
    pub countdown: i64,
}

/// What happened to the original post this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TootOutcome {
    /// Countdown still positive
    NotDue,
    /// Generated and published
    Posted(PostedStatus),
    /// No generated text fit the length limit
    Exhausted,
    /// The platform did not accept the post
    Failed,
}

/// How far notification processing got this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Transport failure; nothing was processed
    FetchFailed,
    /// First successful fetch; cursor set without replying
    Baseline,
    /// Every new notification was handled
    Completed,
    /// Processing stopped early; the rest waits for the next cycle
    Deferred,
}

/// Result of answering a single mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Posted,
    /// Mention cannot be answered (no status or no sender)
    Skipped,
    Exhausted,
    /// The platform refused this reply for good
    Rejected,
    PostFailed,
}

/// Summary of one call to [`BotController::run_one_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Original post result
    pub toot: TootOutcome,
    /// Notification processing result
    pub pass: PassOutcome,
    /// Replies published this cycle
    pub replies_posted: u32,
    /// State after the cycle
    pub state: BotState,
}

/// Posts generated toots on a countdown and answers new mentions.
///
/// All state lives in [`BotState`]; the controller performs one cycle per
/// call and leaves looping and sleeping to [`crate::BotServer`].
pub struct BotController<P: PlatformClient, G: TextGenerator> {
    platform: Arc<P>,
    synthesizer: Synthesizer<G>,
    post_interval: u32,
    state: BotState,
    metrics: BotMetrics,
}

impl<P: PlatformClient, G: TextGenerator> BotController<P, G> {
    /// Creates a controller with an uninitialized cursor and an original
    /// post due on the first cycle.
    pub fn new(platform: Arc<P>, synthesizer: Synthesizer<G>, post_interval: u32) -> Self {
        Self::with_state(platform, synthesizer, post_interval, BotState::default())
    }

    /// Creates a controller resuming from `state`.
    pub fn with_state(
        platform: Arc<P>,
        synthesizer: Synthesizer<G>,
        post_interval: u32,
        state: BotState,
    ) -> Self {
        Self {
            platform,
            synthesizer,
            post_interval,
            state,
            metrics: BotMetrics::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Operation counters.
    pub fn metrics(&self) -> &BotMetrics {
        &self.metrics
    }

    /// Runs one cycle: maybe post a toot, tick the countdown, then process
    /// notifications.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the platform answers the notification
    /// request with an error payload. Nothing else fails the cycle.
    #[instrument(skip(self), fields(platform = self.platform.platform_name()))]
    pub async fn run_one_cycle(&mut self) -> TracerybotResult<CycleReport> {
        self.metrics.record_cycle();

        let toot = if self.state.countdown <= 0 {
            let outcome = self.post_toot().await;
            self.state.countdown = i64::from(self.post_interval);
            outcome
        } else {
            TootOutcome::NotDue
        };
        self.state.countdown -= 1;

        let (pass, replies_posted) = self.process_notifications().await?;

        debug!(
            countdown = self.state.countdown,
            cursor = ?self.state.cursor,
            ?pass,
            replies_posted,
            "Cycle complete"
        );

        Ok(CycleReport {
            toot,
            pass,
            replies_posted,
            state: self.state,
        })
    }

    #[instrument(skip(self))]
    async fn post_toot(&self) -> TootOutcome {
        let text = match self.synthesizer.compose_toot() {
            RetryOutcome::Accepted { value, attempts } => {
                debug!(attempts, "Generated toot");
                value
            }
            RetryOutcome::Exhausted { attempts } => {
                debug!(attempts, "Couldn't generate toot");
                self.metrics.record_synthesis_exhausted();
                return TootOutcome::Exhausted;
            }
        };

        match self.platform.post_status(&StatusPost::original(&text)).await {
            Ok(posted) => {
                info!(status_id = %posted.id(), text = %text, "Tooted");
                self.metrics.record_toot();
                TootOutcome::Posted(posted)
            }
            Err(e) => {
                error!(error = %e, "Failed to post toot");
                self.metrics.record_post_failure();
                TootOutcome::Failed
            }
        }
    }

    #[instrument(skip(self))]
    async fn process_notifications(&mut self) -> TracerybotResult<(PassOutcome, u32)> {
        let mut notifications = match self.platform.list_notifications().await {
            NotificationFetch::Notifications(notifications) => notifications,
            NotificationFetch::ApiError(message) => {
                error!(message = %message, "Platform returned an error payload");
                return Err(ApiError::new(message).into());
            }
            NotificationFetch::TransportError(e) => {
                error!(error = %e, "Failed to fetch notifications");
                self.metrics.record_fetch_failure();
                return Ok((PassOutcome::FetchFailed, 0));
            }
        };

        if !self.state.cursor.is_initialized() {
            let newest = notifications
                .iter()
                .map(|notification| *notification.id())
                .max()
                .unwrap_or_default();
            self.state.cursor.advance_to(newest);
            info!(cursor = %newest, "Established notification baseline");
            return Ok((PassOutcome::Baseline, 0));
        }

        notifications.sort_by_key(|notification| *notification.id());

        let mut replies = 0;
        for notification in &notifications {
            let id = *notification.id();
            if self.state.cursor.has_seen(id) {
                continue;
            }
            if !notification.kind().is_mention() {
                debug!(notification_id = %id, kind = %notification.kind(), "Skipping notification");
                self.state.cursor.advance_to(id);
                continue;
            }
            match self.reply_to(notification).await {
                Reply::Posted => replies += 1,
                Reply::Skipped | Reply::Rejected => {}
                // Dropped mention or failed post: the rest waits for the next cycle
                Reply::Exhausted | Reply::PostFailed => {
                    return Ok((PassOutcome::Deferred, replies));
                }
            }
        }

        Ok((PassOutcome::Completed, replies))
    }

    /// Answers one mention.
    ///
    /// The cursor moves past the mention unless the post failed in a way
    /// that may succeed on retry.
    #[instrument(skip(self, notification), fields(notification_id = %notification.id()))]
    async fn reply_to(&mut self, notification: &Notification) -> Reply {
        let id = *notification.id();
        let sender = notification.sender_handle();

        if sender.is_empty() {
            warn!("Mention has no sender to address");
            self.state.cursor.advance_to(id);
            return Reply::Skipped;
        }

        let Some(target) = notification.source_status_id().clone() else {
            warn!(sender = %sender, "Mention has no status to reply to");
            self.state.cursor.advance_to(id);
            return Reply::Skipped;
        };

        let text = match self.synthesizer.compose_reply(sender) {
            RetryOutcome::Accepted { value, attempts } => {
                debug!(attempts, "Generated reply");
                value
            }
            RetryOutcome::Exhausted { attempts } => {
                debug!(attempts, sender = %sender, "Couldn't generate reply");
                self.metrics.record_synthesis_exhausted();
                self.state.cursor.advance_to(id);
                return Reply::Exhausted;
            }
        };

        match self
            .platform
            .post_status(&StatusPost::reply(&text, target))
            .await
        {
            Ok(posted) => {
                info!(
                    notification_id = %id,
                    sender = %sender,
                    status_id = %posted.id(),
                    text = %text,
                    "Responded to status"
                );
                self.metrics.record_reply();
                self.state.cursor.advance_to(id);
                Reply::Posted
            }
            Err(e) if e.is_permanent() => {
                error!(error = %e, sender = %sender, "Reply rejected, skipping mention");
                self.metrics.record_post_failure();
                self.state.cursor.advance_to(id);
                Reply::Rejected
            }
            Err(e) => {
                error!(error = %e, sender = %sender, "Failed to post reply");
                self.metrics.record_post_failure();
                Reply::PostFailed
            }
        }
    }
}
