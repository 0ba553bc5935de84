//! Outcome of a notification fetch.

use tracerybot_core::Notification;
use tracerybot_error::HttpError;

/// Result of asking the platform for notifications.
///
/// The two failure shapes are kept apart because the controller treats them
/// differently: a transport failure is retried next cycle, an error payload
/// stops the bot.
#[derive(Debug, Clone)]
pub enum NotificationFetch {
    /// Notifications, newest first
    Notifications(Vec<Notification>),
    /// The platform answered with an error object instead of a list
    ApiError(String),
    /// The request never produced a usable response
    TransportError(HttpError),
}

impl NotificationFetch {
    /// Short label for logging.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Notifications(_) => "notifications",
            Self::ApiError(_) => "api_error",
            Self::TransportError(_) => "transport_error",
        }
    }
}

impl From<Vec<Notification>> for NotificationFetch {
    fn from(notifications: Vec<Notification>) -> Self {
        Self::Notifications(notifications)
    }
}

impl From<HttpError> for NotificationFetch {
    fn from(err: HttpError) -> Self {
        Self::TransportError(err)
    }
}
