//! Notification types.

use crate::StatusId;
use serde::{Deserialize, Serialize};

/// Platform-assigned notification identifier.
///
/// Identifiers increase monotonically, so they double as the ordering key
/// and as the processing cursor.
///
/// # Examples
///
/// ```
/// use tracerybot_core::NotificationId;
///
/// assert!(NotificationId(4) < NotificationId(5));
/// assert_eq!(format!("{}", NotificationId(42)), "42");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct NotificationId(pub u64);

/// Kind of event a notification reports.
///
/// Only [`NotificationKind::Mention`] is actionable. Kinds the bot does not
/// know about deserialize as [`NotificationKind::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    /// Someone mentioned the bot in a status
    Mention,
    /// Someone the bot follows posted a status
    Status,
    /// Someone boosted one of the bot's statuses
    Reblog,
    /// Someone followed the bot
    Follow,
    /// Someone requested to follow the bot
    FollowRequest,
    /// Someone favourited one of the bot's statuses
    Favourite,
    /// A poll the bot voted in or created has ended
    Poll,
    /// A status the bot interacted with was edited
    Update,
    /// Any kind this crate does not model
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Whether this kind deserves a reply.
    pub fn is_mention(self) -> bool {
        matches!(self, Self::Mention)
    }
}

/// An event fetched from the platform.
///
/// # Examples
///
/// ```
/// use tracerybot_core::{NotificationBuilder, NotificationId, NotificationKind, StatusId};
///
/// let notification = NotificationBuilder::default()
///     .id(NotificationId(7))
///     .kind(NotificationKind::Mention)
///     .sender_handle("alice@example.social")
///     .source_status_id(Some(StatusId::from("109")))
///     .build()
///     .expect("valid notification");
///
/// assert_eq!(*notification.id(), NotificationId(7));
/// assert!(notification.kind().is_mention());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Notification {
    /// Ordering key and cursor value
    id: NotificationId,
    /// Event kind
    kind: NotificationKind,
    /// Account that triggered the event (`acct` form, without leading `@`)
    sender_handle: String,
    /// Status to reply to, when the event carries one
    #[builder(default)]
    source_status_id: Option<StatusId>,
}
