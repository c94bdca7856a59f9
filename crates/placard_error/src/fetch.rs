//! Document fetch error types.

/// Ways a document download can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// The request never produced a response
    #[display("Request to {} failed: {}", url, message)]
    Request {
        /// Requested URL
        url: String,
        /// Transport error message
        message: String,
    },
    /// The server answered with a non-success status
    #[display("GET {} returned status {}", url, status)]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },
    /// The response body could not be read
    #[display("Failed to read body of {}: {}", url, message)]
    Body {
        /// Requested URL
        url: String,
        /// Read error message
        message: String,
    },
}

/// Document fetch error with location tracking.
///
/// # Examples
///
/// ```
/// use placard_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Status {
///     url: "http://localhost/guide.pdf".to_string(),
///     status: 404,
/// });
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
