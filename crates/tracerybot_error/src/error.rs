//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, GrammarError, HttpError, JsonError};

/// Every error condition the bot can surface.
///
/// # Examples
///
/// ```
/// use tracerybot_error::{TracerybotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: TracerybotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TracerybotErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Error payload returned by the platform API
    #[from(ApiError)]
    Api(ApiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Grammar loading or parsing error
    #[from(GrammarError)]
    Grammar(GrammarError),
}

/// Tracerybot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tracerybot_error::{TracerybotError, TracerybotResult, ConfigError};
///
/// fn might_fail() -> TracerybotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tracerybot Error: {}", _0)]
pub struct TracerybotError(Box<TracerybotErrorKind>);

impl TracerybotError {
    /// Create a new error from a kind.
    pub fn new(kind: TracerybotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TracerybotErrorKind {
        &self.0
    }

    /// Whether the error should stop the run loop.
    ///
    /// Only an error payload from the platform API is fatal; transport,
    /// configuration and grammar errors are handled where they occur.
    ///
    /// ```
    /// use tracerybot_error::{ApiError, HttpError, TracerybotError};
    ///
    /// assert!(TracerybotError::from(ApiError::new("bad token")).is_fatal());
    /// assert!(!TracerybotError::from(HttpError::new("timeout")).is_fatal());
    /// ```
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), TracerybotErrorKind::Api(_))
    }

    /// Whether the platform refused the request outright, so retrying the
    /// same request cannot succeed.
    ///
    /// ```
    /// use tracerybot_error::{HttpError, TracerybotError};
    ///
    /// assert!(TracerybotError::from(HttpError::with_status(404, "gone")).is_permanent());
    /// assert!(!TracerybotError::from(HttpError::with_status(502, "bad gateway")).is_permanent());
    /// ```
    pub fn is_permanent(&self) -> bool {
        match self.kind() {
            TracerybotErrorKind::Http(e) => e.is_permanent(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to TracerybotErrorKind
impl<T> From<T> for TracerybotError
where
    T: Into<TracerybotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for tracerybot operations.
///
/// # Examples
///
/// ```
/// use tracerybot_error::{TracerybotResult, HttpError};
///
/// fn fetch_data() -> TracerybotResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type TracerybotResult<T> = std::result::Result<T, TracerybotError>;
