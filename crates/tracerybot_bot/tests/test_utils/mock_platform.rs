//! Mock platform client for testing.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracerybot_core::{Notification, PostedStatus, StatusId, StatusPost};
use tracerybot_error::{HttpError, TracerybotResult};
use tracerybot_interface::{NotificationFetch, PlatformClient};

/// Mock platform that replays queued fetch results and records posts.
///
/// Once the queue is empty every fetch returns an empty list.
#[derive(Default)]
pub struct MockPlatform {
    fetches: Mutex<VecDeque<NotificationFetch>>,
    posts: Mutex<Vec<StatusPost>>,
    fail_next_posts: Mutex<usize>,
    rejected_targets: Mutex<HashMap<String, u16>>,
    fetch_count: Mutex<usize>,
}

impl MockPlatform {
    /// Create a mock with an empty fetch queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch.
    pub fn push_notifications(&self, notifications: Vec<Notification>) {
        self.push_fetch(NotificationFetch::Notifications(notifications));
    }

    /// Queue an arbitrary fetch result.
    pub fn push_fetch(&self, fetch: NotificationFetch) {
        self.fetches.lock().unwrap().push_back(fetch);
    }

    /// Make the next `count` posts fail.
    pub fn fail_next_posts(&self, count: usize) {
        *self.fail_next_posts.lock().unwrap() = count;
    }

    /// Answer every reply to status `target` with `status`.
    pub fn reject_replies_to(&self, target: &str, status: u16) {
        self.rejected_targets
            .lock()
            .unwrap()
            .insert(target.to_string(), status);
    }

    /// Every post accepted so far, in order.
    pub fn posts(&self) -> Vec<StatusPost> {
        self.posts.lock().unwrap().clone()
    }

    /// Accepted posts that are replies.
    pub fn replies(&self) -> Vec<StatusPost> {
        self.posts()
            .into_iter()
            .filter(|post| post.in_reply_to().is_some())
            .collect()
    }

    /// Accepted posts that are original toots.
    pub fn toots(&self) -> Vec<StatusPost> {
        self.posts()
            .into_iter()
            .filter(|post| post.in_reply_to().is_none())
            .collect()
    }

    /// Reply targets of accepted replies, in order.
    pub fn reply_targets(&self) -> Vec<String> {
        self.replies()
            .iter()
            .filter_map(|post| post.in_reply_to().as_ref().map(|id| id.0.clone()))
            .collect()
    }

    /// Number of times notifications were fetched.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn list_notifications(&self) -> NotificationFetch {
        *self.fetch_count.lock().unwrap() += 1;
        self.fetches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| NotificationFetch::Notifications(Vec::new()))
    }

    async fn post_status(&self, post: &StatusPost) -> TracerybotResult<PostedStatus> {
        {
            let mut failures = self.fail_next_posts.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(HttpError::with_status(503, "Mock post failure").into());
            }
        }
        if let Some(target) = post.in_reply_to() {
            if let Some(status) = self.rejected_targets.lock().unwrap().get(&target.0) {
                return Err(HttpError::with_status(*status, "Mock rejection").into());
            }
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push(post.clone());
        Ok(PostedStatus::new(
            StatusId(format!("posted-{}", posts.len())),
            None,
        ))
    }

    async fn verify_credentials(&self) -> TracerybotResult<String> {
        Ok("tracerybot".to_string())
    }

    fn platform_name(&self) -> &str {
        "mock"
    }
}
