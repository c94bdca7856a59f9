//! Message types for conversation history.

use crate::{Content, Role};
use serde::{Deserialize, Serialize};

/// One turn in a conversation.
///
/// # Examples
///
/// ```
/// use placard_core::{Message, Role};
///
/// let message = Message::user("I need a poster for a winter event");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().text(), "I need a poster for a winter event");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message
    content: Content,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<Content>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<Content>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<Content>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
