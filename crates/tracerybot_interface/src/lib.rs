//! Trait definitions for the collaborators the bot controller consumes.
//!
//! - [`PlatformClient`]: the social platform (list notifications, post)
//! - [`TextGenerator`]: the grammar engine (expand a symbol into text)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fetch;
mod traits;

pub use fetch::NotificationFetch;
pub use traits::{PlatformClient, TextGenerator};
