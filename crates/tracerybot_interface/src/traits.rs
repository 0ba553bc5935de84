//! Boundary traits.

use crate::NotificationFetch;
use async_trait::async_trait;
use tracerybot_core::{PostedStatus, StatusPost};
use tracerybot_error::TracerybotResult;

/// Social platform the bot reads from and posts to.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Fetch the current notification list, newest first.
    ///
    /// Never fails outright: transport problems and API error payloads are
    /// variants of [`NotificationFetch`].
    async fn list_notifications(&self) -> NotificationFetch;

    /// Publish a status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the platform
    /// rejects the post.
    async fn post_status(&self, post: &StatusPost) -> TracerybotResult<PostedStatus>;

    /// Check the credentials and return the account handle they belong to.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails or the platform is unreachable.
    async fn verify_credentials(&self) -> TracerybotResult<String>;

    /// Platform name for logging (e.g., "mastodon").
    fn platform_name(&self) -> &str;
}

/// Grammar engine that turns a start symbol into text.
///
/// Implementations are expected to be impure (each call may return
/// different text) and to always terminate. Output length is unbounded;
/// callers enforce their own limits.
pub trait TextGenerator: Send + Sync {
    /// Expand `symbol` into a fresh piece of text.
    fn expand(&self, symbol: &str) -> String;
}
