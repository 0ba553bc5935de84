//! HTTP error types.

/// HTTP error wrapping transport failures with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when the server answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracerybot_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert!(err.status.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError for a non-success response status.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracerybot_error::HttpError;
    ///
    /// let err = HttpError::with_status(503, "Service Unavailable");
    /// assert_eq!(err.status, Some(503));
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the server refused the request itself, so sending it again
    /// cannot succeed.
    ///
    /// True for 4xx statuses other than 408 (timeout) and 429 (rate limit).
    ///
    /// ```
    /// use tracerybot_error::HttpError;
    ///
    /// assert!(HttpError::with_status(422, "Validation failed").is_permanent());
    /// assert!(HttpError::with_status(404, "Record not found").is_permanent());
    /// assert!(!HttpError::with_status(429, "Too many requests").is_permanent());
    /// assert!(!HttpError::with_status(503, "Unavailable").is_permanent());
    /// assert!(!HttpError::new("Connection reset").is_permanent());
    /// ```
    pub fn is_permanent(&self) -> bool {
        matches!(self.status, Some(400..=499)) && !matches!(self.status, Some(408 | 429))
    }
}
