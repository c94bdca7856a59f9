//! Conversation state.

use derive_getters::Getters;
use placard_core::{Content, Message};
use serde::{Deserialize, Serialize};

/// Identifier of a live conversation.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Ordered history of one design conversation.
///
/// Turns alternate user/assistant starting with user. The only way to add turns is
/// [`Conversation::record_exchange`], which appends one of each.
///
/// # Examples
///
/// ```
/// use placard_core::{Content, Role};
/// use placard_design::{Conversation, ConversationId};
///
/// let mut conversation = Conversation::new(ConversationId::from("0"));
/// conversation.record_exchange(Content::from("A poster, please"), Content::from("Option 1 or 2?"));
///
/// let roles: Vec<Role> = conversation.turns().iter().map(|t| *t.role()).collect();
/// assert_eq!(roles, vec![Role::User, Role::Assistant]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Conversation {
    /// Identifier
    id: ConversationId,
    /// Recorded turns
    turns: Vec<Message>,
    /// Most recent LaTeX document produced or supplied
    latex: Option<String>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            turns: Vec::new(),
            latex: None,
        }
    }

    /// The history followed by a not-yet-recorded user turn, ready to send.
    pub fn with_pending(&self, user: Content) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.turns.len() + 1);
        messages.extend(self.turns.iter().cloned());
        messages.push(Message::user(user));
        messages
    }

    /// Appends a user turn and the assistant's reply.
    pub fn record_exchange(&mut self, user: Content, reply: Content) {
        self.turns.push(Message::user(user));
        self.turns.push(Message::assistant(reply));
    }

    /// Replaces the current LaTeX document.
    pub fn set_latex(&mut self, latex: impl Into<String>) {
        self.latex = Some(latex.into());
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True before the first exchange is recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
