//! Error types for tracerybot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - Leaf error structs carry a message (or a `*ErrorKind`) plus the source
//!   location captured with `#[track_caller]`
//! - `TracerybotErrorKind` enumerates every leaf error
//! - `TracerybotError` boxes the kind and converts from any leaf via `?`
//!
//! # Examples
//!
//! ```
//! use tracerybot_error::{TracerybotResult, HttpError};
//!
//! fn fetch_data() -> TracerybotResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod grammar;
mod http;
mod json;

pub use api::ApiError;
pub use config::ConfigError;
pub use error::{TracerybotError, TracerybotErrorKind, TracerybotResult};
pub use grammar::{GrammarError, GrammarErrorKind};
pub use http::HttpError;
pub use json::JsonError;
