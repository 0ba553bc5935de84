//! JSON models for Mastodon API payloads.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! payloads is ignored.

use serde::{Deserialize, Serialize};
use tracerybot_core::{
    Notification, NotificationBuilder, NotificationId, NotificationKind, PostedStatus, StatusId,
    StatusPost,
};
use tracerybot_error::HttpError;
use tracerybot_interface::NotificationFetch;

/// Account object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccountJson {
    /// `user` for local accounts, `user@domain` for remote ones
    pub acct: String,
}

/// Status object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusJson {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub account: Option<AccountJson>,
}

/// Notification object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NotificationJson {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub account: Option<AccountJson>,
    #[serde(default)]
    pub status: Option<StatusJson>,
}

/// Error object returned in place of a resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorJson {
    pub error: String,
}

/// Body of a notifications response: either the list or an error object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NotificationsBody {
    List(Vec<NotificationJson>),
    Error(ErrorJson),
}

/// Body of `POST /api/v1/statuses`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusRequest<'a> {
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'static str>,
}

impl<'a> From<&'a StatusPost> for StatusRequest<'a> {
    fn from(post: &'a StatusPost) -> Self {
        Self {
            status: post.text(),
            in_reply_to_id: post.in_reply_to().as_ref().map(|id| id.0.as_str()),
            visibility: post.visibility().as_api_value(),
        }
    }
}

impl From<StatusJson> for PostedStatus {
    fn from(status: StatusJson) -> Self {
        PostedStatus::new(StatusId(status.id), status.url)
    }
}

impl TryFrom<NotificationJson> for Notification {
    type Error = String;

    fn try_from(json: NotificationJson) -> Result<Self, Self::Error> {
        let id = json
            .id
            .parse::<u64>()
            .map_err(|e| format!("Notification id '{}' is not numeric: {}", json.id, e))?;

        // The status author is the account to address; the notification's
        // own account is the fallback for events without a status.
        let sender_handle = json
            .status
            .as_ref()
            .and_then(|status| status.account.as_ref())
            .or(json.account.as_ref())
            .map(|account| account.acct.clone())
            .unwrap_or_default();

        NotificationBuilder::default()
            .id(NotificationId(id))
            .kind(json.kind)
            .sender_handle(sender_handle)
            .source_status_id(json.status.map(|status| StatusId(status.id)))
            .build()
            .map_err(|e| e.to_string())
    }
}

/// Interprets a successful notifications response body.
///
/// Only an `{"error": ...}` object or a list entry with a non-numeric id is an
/// API error. A body that is not JSON at all (an empty body, a proxy's HTML
/// page) is a transport error and is retried next cycle.
pub(crate) fn parse_notifications(status: u16, body: &str) -> NotificationFetch {
    let parsed: NotificationsBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            return HttpError::with_status(
                status,
                format!("Unreadable notifications payload: {}", e),
            )
            .into();
        }
    };

    match parsed {
        NotificationsBody::Error(error) => NotificationFetch::ApiError(error.error),
        NotificationsBody::List(list) => list
            .into_iter()
            .map(Notification::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_or_else(NotificationFetch::ApiError, NotificationFetch::Notifications),
    }
}
