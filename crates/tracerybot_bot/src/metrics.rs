//! Metrics collection for bot operations.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for bot operations.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone)]
pub struct BotMetrics {
    inner: Arc<BotMetricsInner>,
}

#[derive(Debug)]
struct BotMetricsInner {
    cycles: AtomicU64,
    toots_posted: AtomicU64,
    replies_posted: AtomicU64,
    syntheses_exhausted: AtomicU64,
    fetch_failures: AtomicU64,
    post_failures: AtomicU64,
    last_post: parking_lot::Mutex<Option<Instant>>,
}

impl Default for BotMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BotMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BotMetricsInner {
                cycles: AtomicU64::new(0),
                toots_posted: AtomicU64::new(0),
                replies_posted: AtomicU64::new(0),
                syntheses_exhausted: AtomicU64::new(0),
                fetch_failures: AtomicU64::new(0),
                post_failures: AtomicU64::new(0),
                last_post: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records the start of a cycle.
    pub fn record_cycle(&self) {
        self.inner.cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a published original post.
    pub fn record_toot(&self) {
        self.inner.toots_posted.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_post.lock() = Some(Instant::now());
    }

    /// Records a published reply.
    pub fn record_reply(&self) {
        self.inner.replies_posted.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_post.lock() = Some(Instant::now());
    }

    /// Records text synthesis that never fit the length limit.
    pub fn record_synthesis_exhausted(&self) {
        self.inner.syntheses_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed notification fetch.
    pub fn record_fetch_failure(&self) {
        self.inner.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a post the platform did not accept.
    pub fn record_post_failure(&self) {
        self.inner.post_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the cycle count.
    pub fn cycles(&self) -> u64 {
        self.inner.cycles.load(Ordering::Relaxed)
    }

    /// Gets the number of original posts published.
    pub fn toots_posted(&self) -> u64 {
        self.inner.toots_posted.load(Ordering::Relaxed)
    }

    /// Gets the number of replies published.
    pub fn replies_posted(&self) -> u64 {
        self.inner.replies_posted.load(Ordering::Relaxed)
    }

    /// Gets the number of syntheses that ran out of attempts.
    pub fn syntheses_exhausted(&self) -> u64 {
        self.inner.syntheses_exhausted.load(Ordering::Relaxed)
    }

    /// Gets the number of failed notification fetches.
    pub fn fetch_failures(&self) -> u64 {
        self.inner.fetch_failures.load(Ordering::Relaxed)
    }

    /// Gets the number of rejected posts.
    pub fn post_failures(&self) -> u64 {
        self.inner.post_failures.load(Ordering::Relaxed)
    }

    /// Gets time since the last successful post of either kind.
    pub fn time_since_last_post(&self) -> Option<std::time::Duration> {
        self.inner.last_post.lock().map(|instant| instant.elapsed())
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cycles: self.cycles(),
            toots_posted: self.toots_posted(),
            replies_posted: self.replies_posted(),
            syntheses_exhausted: self.syntheses_exhausted(),
            fetch_failures: self.fetch_failures(),
            post_failures: self.post_failures(),
            seconds_since_last_post: self.time_since_last_post().map(|d| d.as_secs()),
        }
    }
}

/// Serializable snapshot of bot metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Cycles started
    pub cycles: u64,
    /// Original posts published
    pub toots_posted: u64,
    /// Replies published
    pub replies_posted: u64,
    /// Syntheses that never fit the length limit
    pub syntheses_exhausted: u64,
    /// Notification fetches that failed in transport
    pub fetch_failures: u64,
    /// Posts the platform rejected
    pub post_failures: u64,
    /// Seconds since the last successful post
    pub seconds_since_last_post: Option<u64>,
}
