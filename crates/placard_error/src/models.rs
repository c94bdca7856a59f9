//! Model provider error types.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// Transport failure (connect, timeout, TLS)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Non-success status returned by the API
    #[display("API returned {}: {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// Request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Kinds of model errors, grouped by provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Anthropic Messages API failure
    #[display("Anthropic: {}", _0)]
    Anthropic(AnthropicErrorKind),
    /// A provider-neutral request could not be assembled
    #[display("Invalid generation request: {}", _0)]
    InvalidRequest(String),
    /// The model answered without any text
    #[display("Model {} returned an empty reply", _0)]
    EmptyReply(String),
    /// Failure reported by any other driver
    #[display("{}", _0)]
    Driver(String),
}

/// Error returned by an LLM driver, with location tracking.
///
/// # Examples
///
/// ```
/// use placard_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::ApiError {
///     status: 529,
///     message: "overloaded".to_string(),
/// }));
/// assert!(format!("{}", err).contains("529"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at line {} in {}", kind, line, file)]
pub struct ModelsError {
    /// The kind of error that occurred
    pub kind: ModelsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
