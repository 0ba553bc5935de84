//! Platform API error payloads.

/// Error reported by the platform in place of the expected response body.
///
/// The platform answered successfully at the transport level but the body
/// was an error object (or could not be understood). The run loop treats
/// this as unrecoverable.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", message, line, file)]
pub struct ApiError {
    /// Error message reported by the platform
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracerybot_error::ApiError;
    ///
    /// let err = ApiError::new("The access token is invalid");
    /// assert!(format!("{}", err).contains("access token"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
