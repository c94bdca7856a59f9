//! Error types for the Placard design relay.
//!
//! Every concern gets its own error struct that records the source location it was
//! created at. [`PlacardError`] wraps any of them so the rest of the workspace can use a
//! single [`PlacardResult`] alias.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod conversation;
mod fetch;
mod http;
mod models;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::ConfigError;
pub use conversation::{ConversationError, ConversationErrorKind};
pub use fetch::{FetchError, FetchErrorKind};
pub use http::HttpError;
pub use models::{AnthropicErrorKind, ModelsError, ModelsErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PlacardErrorKind {
    /// HTTP listener or client setup error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// LLM driver error
    Models(ModelsError),
    /// Document download error
    Fetch(FetchError),
    /// Conversation lookup or request validation error
    Conversation(ConversationError),
    /// Brand analysis failure
    Analysis(AnalysisError),
}

impl std::fmt::Display for PlacardErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacardErrorKind::Http(e) => write!(f, "{}", e),
            PlacardErrorKind::Config(e) => write!(f, "{}", e),
            PlacardErrorKind::Models(e) => write!(f, "{}", e),
            PlacardErrorKind::Fetch(e) => write!(f, "{}", e),
            PlacardErrorKind::Conversation(e) => write!(f, "{}", e),
            PlacardErrorKind::Analysis(e) => write!(f, "{}", e),
        }
    }
}

/// Placard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use placard_error::{ConversationError, ConversationErrorKind, PlacardError};
///
/// let err: PlacardError =
///     ConversationError::new(ConversationErrorKind::NotFound("3".to_string())).into();
/// assert!(err.is_not_found());
/// assert!(!err.is_external());
/// ```
#[derive(Debug)]
pub struct PlacardError(Box<PlacardErrorKind>);

impl PlacardError {
    /// Create a new error from a kind.
    pub fn new(kind: PlacardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlacardErrorKind {
        &self.0
    }

    /// True for an unknown conversation identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            PlacardErrorKind::Conversation(ConversationError {
                kind: ConversationErrorKind::NotFound(_),
                ..
            })
        )
    }

    /// True when the caller's request was incomplete or malformed.
    pub fn is_bad_request(&self) -> bool {
        matches!(self.kind(), PlacardErrorKind::Conversation(e) if e.kind.is_bad_request())
    }

    /// True when an external collaborator (model endpoint or document host) failed.
    pub fn is_external(&self) -> bool {
        matches!(
            self.kind(),
            PlacardErrorKind::Models(_) | PlacardErrorKind::Fetch(_) | PlacardErrorKind::Analysis(_)
        )
    }

    /// Message without the location decoration, suitable for API callers.
    pub fn detail(&self) -> String {
        match self.kind() {
            PlacardErrorKind::Conversation(e) => e.kind.to_string(),
            PlacardErrorKind::Models(e) => e.kind.to_string(),
            PlacardErrorKind::Fetch(e) => e.kind.to_string(),
            PlacardErrorKind::Analysis(e) => e.to_string(),
            PlacardErrorKind::Http(e) => e.message.clone(),
            PlacardErrorKind::Config(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for PlacardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placard Error: {}", self.0)
    }
}

impl std::error::Error for PlacardError {}

// Generic From implementation for any type that converts to PlacardErrorKind
impl<T> From<T> for PlacardError
where
    T: Into<PlacardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Placard operations.
pub type PlacardResult<T> = std::result::Result<T, PlacardError>;
