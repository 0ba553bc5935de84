//! Outbound status types.

use serde::{Deserialize, Serialize};

/// Platform-specific status identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct StatusId(pub String);

impl From<&str> for StatusId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StatusId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Audience scope of a post.
///
/// `Default` leaves the choice to the account's server-side preference and
/// is not sent on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// Account default
    #[default]
    Default,
    /// Visible to everyone, shown in public timelines
    Public,
    /// Visible to everyone, hidden from public timelines
    Unlisted,
    /// Followers only
    Private,
    /// Mentioned accounts only
    Direct,
}

impl Visibility {
    /// Value for the `visibility` request field, if one should be sent.
    ///
    /// ```
    /// use tracerybot_core::Visibility;
    ///
    /// assert_eq!(Visibility::Public.as_api_value(), Some("public"));
    /// assert_eq!(Visibility::Default.as_api_value(), None);
    /// ```
    pub fn as_api_value(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Public => Some("public"),
            Self::Unlisted => Some("unlisted"),
            Self::Private => Some("private"),
            Self::Direct => Some("direct"),
        }
    }
}

/// A message the bot wants to publish.
///
/// # Examples
///
/// ```
/// use tracerybot_core::{StatusId, StatusPost, Visibility};
///
/// let toot = StatusPost::original("hello fediverse");
/// assert_eq!(*toot.visibility(), Visibility::Public);
/// assert!(toot.in_reply_to().is_none());
///
/// let reply = StatusPost::reply("@alice hi", StatusId::from("12"));
/// assert_eq!(*reply.visibility(), Visibility::Default);
/// assert_eq!(reply.in_reply_to().as_ref().map(|id| id.0.as_str()), Some("12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StatusPost {
    /// Message text
    text: String,
    /// Status this post answers
    in_reply_to: Option<StatusId>,
    /// Audience scope
    visibility: Visibility,
}

impl StatusPost {
    /// An original, public post.
    pub fn original(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            in_reply_to: None,
            visibility: Visibility::Public,
        }
    }

    /// A reply to `target`, with the account's default visibility.
    pub fn reply(text: impl Into<String>, target: StatusId) -> Self {
        Self {
            text: text.into(),
            in_reply_to: Some(target),
            visibility: Visibility::Default,
        }
    }
}

/// Platform acknowledgement of a published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PostedStatus {
    /// Identifier assigned by the platform
    id: StatusId,
    /// Public URL, when the platform reports one
    url: Option<String>,
}

impl PostedStatus {
    /// Creates a new posted status record.
    pub fn new(id: StatusId, url: Option<String>) -> Self {
        Self { id, url }
    }
}
