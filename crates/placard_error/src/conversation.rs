//! Conversation bookkeeping errors.

/// Specific error conditions for conversation operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConversationErrorKind {
    /// No live conversation has this identifier
    NotFound(String),
    /// A stage that continues a conversation was sent without an identifier
    MissingConversationId(String),
    /// An update was requested but no LaTeX was supplied or recorded
    MissingLatex(String),
    /// The request type is not one of the recognized stages
    UnknownStage(String),
    /// The request body could not be understood
    InvalidRequest(String),
}

impl ConversationErrorKind {
    /// Returns true when the caller sent something malformed or incomplete.
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, ConversationErrorKind::NotFound(_))
    }
}

impl std::fmt::Display for ConversationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationErrorKind::NotFound(_) => write!(f, "Conversation not found"),
            ConversationErrorKind::MissingConversationId(stage) => {
                write!(f, "Conversation ID required for {}", stage)
            }
            ConversationErrorKind::MissingLatex(id) => write!(
                f,
                "No LaTeX supplied or recorded for conversation {}",
                id
            ),
            ConversationErrorKind::UnknownStage(stage) => write!(
                f,
                "Unknown request_type '{}': expected initial, style-choice or update",
                stage
            ),
            ConversationErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

/// Conversation error with location tracking.
///
/// # Examples
///
/// ```
/// use placard_error::{ConversationError, ConversationErrorKind};
///
/// let err = ConversationError::new(ConversationErrorKind::NotFound("7".to_string()));
/// assert_eq!(err.kind.to_string(), "Conversation not found");
/// assert!(!err.kind.is_bad_request());
/// ```
#[derive(Debug, Clone)]
pub struct ConversationError {
    /// The specific error condition
    pub kind: ConversationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConversationError {
    /// Create a new ConversationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConversationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConversationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Conversation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConversationError {}
