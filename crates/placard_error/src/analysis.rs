//! Brand analysis error types.

use crate::FetchError;

/// The step of a brand analysis that failed.
#[derive(Debug, Clone)]
pub enum AnalysisErrorKind {
    /// Downloading the guideline document failed
    Fetch(FetchError),
    /// The model call failed, with the driver's message
    Model(String),
}

impl std::fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisErrorKind::Fetch(e) => write!(f, "{}", e.kind),
            AnalysisErrorKind::Model(msg) => write!(f, "{}", msg),
        }
    }
}

/// Single failure type for a brand analysis run.
///
/// # Examples
///
/// ```
/// use placard_error::{AnalysisError, AnalysisErrorKind, FetchError, FetchErrorKind};
///
/// let fetch = FetchError::new(FetchErrorKind::Status {
///     url: "http://localhost/missing.pdf".to_string(),
///     status: 404,
/// });
/// let err = AnalysisError::new(AnalysisErrorKind::Fetch(fetch));
/// assert_eq!(
///     err.to_string(),
///     "Error analyzing brand guidelines: GET http://localhost/missing.pdf returned status 404"
/// );
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Error analyzing brand guidelines: {}", kind)]
pub struct AnalysisError {
    /// The failed step
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new analysis error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AnalysisErrorKind::Fetch(e) => Some(e),
            AnalysisErrorKind::Model(_) => None,
        }
    }
}
