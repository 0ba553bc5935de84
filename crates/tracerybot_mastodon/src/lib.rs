//! Mastodon platform client.
//!
//! Implements [`tracerybot_interface::PlatformClient`] on top of the
//! Mastodon REST API:
//! - `GET /api/v1/notifications`
//! - `POST /api/v1/statuses`
//! - `GET /api/v1/accounts/verify_credentials`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod json_models;

pub use client::MastodonClient;
