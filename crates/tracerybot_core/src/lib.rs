//! Core data types for tracerybot.
//!
//! These types describe what the bot sees (notifications) and what it sends
//! (status posts). They carry no behavior beyond ordering and formatting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cursor;
mod notification;
mod status;

pub use cursor::Cursor;
pub use notification::{Notification, NotificationBuilder, NotificationId, NotificationKind};
pub use status::{PostedStatus, StatusId, StatusPost, Visibility};
