//! Turn and response content.

use serde::{Deserialize, Serialize};

/// A typed block inside structured content.
///
/// The serialized shape matches the block format used by the Messages API, so a block
/// list can be passed through to HTTP callers untouched.
///
/// # Examples
///
/// ```
/// use placard_core::ContentBlock;
///
/// let block = ContentBlock::text("hello");
/// let json = serde_json::to_value(&block).unwrap();
/// assert_eq!(json["type"], "text");
/// assert_eq!(json["text"], "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text.
    Text {
        /// The text itself
        text: String,
    },
    /// A base64-encoded document attachment.
    Document {
        /// MIME type, e.g. "application/pdf"
        media_type: String,
        /// Base64 payload
        data: String,
    },
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Creates a document block from an already encoded payload.
    pub fn document(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentBlock::Document {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Returns the text of a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Document { .. } => None,
        }
    }
}

/// Content of a turn or of a model reply: either plain text or a list of blocks.
///
/// Serializes untagged, so `Text` becomes a JSON string and `Blocks` a JSON array.
///
/// # Examples
///
/// ```
/// use placard_core::{Content, ContentBlock};
///
/// let reply = Content::Blocks(vec![
///     ContentBlock::text("\\documentclass{article}"),
///     ContentBlock::text("\\begin{document}"),
/// ]);
/// assert_eq!(reply.text(), "\\documentclass{article}\n\\begin{document}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// Ordered typed blocks.
    Blocks(Vec<ContentBlock>),
}

impl Content {
    /// Concatenates all text, joining text blocks with newlines. Documents are skipped.
    pub fn text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Blocks(blocks) => blocks
                .iter()
                .filter_map(ContentBlock::as_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// True when there is no attachment and no text other than whitespace.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.trim().is_empty(),
            Content::Blocks(blocks) => blocks
                .iter()
                .all(|b| b.as_text().is_some_and(|t| t.trim().is_empty())),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}
