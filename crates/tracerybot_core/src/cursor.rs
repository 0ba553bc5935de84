//! Notification cursor.

use crate::NotificationId;
use serde::{Deserialize, Serialize};

/// Highest notification id already handled.
///
/// The cursor starts [`Cursor::Uninitialized`]; the first successful fetch
/// sets a baseline so notifications that predate the process are never
/// answered. From then on it only moves forward.
///
/// # Examples
///
/// ```
/// use tracerybot_core::{Cursor, NotificationId};
///
/// let mut cursor = Cursor::Uninitialized;
/// assert!(!cursor.is_initialized());
///
/// cursor.advance_to(NotificationId(10));
/// assert!(cursor.has_seen(NotificationId(10)));
/// assert!(!cursor.has_seen(NotificationId(11)));
///
/// // Never moves backwards.
/// cursor.advance_to(NotificationId(3));
/// assert_eq!(cursor.position(), Some(NotificationId(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cursor {
    /// No fetch has succeeded yet
    #[default]
    Uninitialized,
    /// Every id at or below this one has been handled
    At(NotificationId),
}

impl Cursor {
    /// Whether a baseline has been established.
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Current position, if initialized.
    pub fn position(&self) -> Option<NotificationId> {
        match self {
            Self::Uninitialized => None,
            Self::At(id) => Some(*id),
        }
    }

    /// Whether `id` is at or below the cursor.
    ///
    /// An uninitialized cursor has seen nothing.
    pub fn has_seen(&self, id: NotificationId) -> bool {
        self.position().is_some_and(|position| id <= position)
    }

    /// Moves the cursor to `id` unless it is already at or beyond it.
    pub fn advance_to(&mut self, id: NotificationId) {
        if !self.has_seen(id) {
            *self = Self::At(id);
        }
    }
}
