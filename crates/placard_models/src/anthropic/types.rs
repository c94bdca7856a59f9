//! Anthropic API request and response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Anthropic API request.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// List of messages
    messages: Vec<AnthropicMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

impl AnthropicRequest {
    /// Creates a builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicMessage {
    /// Role of the message sender
    role: String,
    /// Plain string or content blocks
    content: AnthropicMessageContent,
}

impl AnthropicMessage {
    /// Creates a message from a role name and its content.
    pub fn new(role: impl Into<String>, content: AnthropicMessageContent) -> Self {
        Self {
            role: role.into(),
            content,
        }
    }
}

/// Message content: the API accepts either a bare string or a block list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnthropicMessageContent {
    /// Bare string
    Text(String),
    /// Typed blocks
    Blocks(Vec<AnthropicContentBlock>),
}

/// Content block in an Anthropic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
    /// Document content
    Document {
        /// Document source
        source: AnthropicDocumentSource,
    },
}

/// Inline document source for the Anthropic API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicDocumentSource {
    /// Source type (always "base64")
    r#type: String,
    /// Media type
    media_type: String,
    /// Base64-encoded document data
    data: String,
}

impl AnthropicDocumentSource {
    /// Creates a base64 source.
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            r#type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// Anthropic API response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response ID
    id: String,
    /// Response type
    #[serde(rename = "type")]
    response_type: String,
    /// Role (should be "assistant")
    role: String,
    /// Content blocks
    content: Vec<AnthropicContent>,
    /// Model used
    model: String,
    /// Stop reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Usage information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<AnthropicUsage>,
}

/// Content in an Anthropic response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicContent {
    /// Content type ("text" for generated prose)
    #[serde(rename = "type")]
    content_type: String,
    /// Text content, empty for non-text blocks
    #[serde(default)]
    text: String,
}

/// Usage information from Anthropic API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens
    input_tokens: u32,
    /// Output tokens
    output_tokens: u32,
}
