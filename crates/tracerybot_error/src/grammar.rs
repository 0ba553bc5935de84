//! Grammar error types.

/// Specific error conditions for grammar loading and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GrammarErrorKind {
    /// Failed to read grammar file
    #[display("Failed to read grammar file: {}", _0)]
    FileRead(String),
    /// Grammar file is not a JSON object of rule lists
    #[display("Failed to parse grammar: {}", _0)]
    Parse(String),
    /// A rule has unbalanced `#` or `[`/`]` delimiters
    #[display("Malformed rule '{}': {}", rule, message)]
    MalformedRule {
        /// Rule text
        rule: String,
        /// What is wrong with it
        message: String,
    },
    /// A symbol has no rules to choose from
    #[display("Symbol '{}' has no rules", _0)]
    EmptySymbol(String),
}

/// Error type for grammar operations.
///
/// # Examples
///
/// ```
/// use tracerybot_error::{GrammarError, GrammarErrorKind};
///
/// let err = GrammarError::new(GrammarErrorKind::EmptySymbol("toot".to_string()));
/// assert!(format!("{}", err).contains("toot"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Grammar Error: {} at line {} in {}", kind, line, file)]
pub struct GrammarError {
    /// The specific error condition
    pub kind: GrammarErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GrammarError {
    /// Create a new GrammarError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GrammarErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
