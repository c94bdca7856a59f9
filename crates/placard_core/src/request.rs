//! Request and response types for LLM generation.

use crate::{Content, Message, TokenUsageData};
use serde::{Deserialize, Serialize};

/// Generic generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// System instruction sent alongside the turns
    system: Option<String>,
    /// Ordered conversation turns, starting with a user turn
    messages: Vec<Message>,
    /// Output budget in tokens
    max_tokens: Option<u32>,
    /// Model identifier, falling back to the driver's default
    model: Option<String>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// Generated content, passed through as the provider returned it
    content: Content,
    /// Model that produced the content
    #[builder(default)]
    model: Option<String>,
    /// Why generation stopped
    #[builder(default)]
    stop_reason: Option<String>,
    /// Token accounting, when the provider reports it
    #[builder(default)]
    usage: Option<TokenUsageData>,
}

impl GenerateResponse {
    /// Creates a response carrying only content.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            model: None,
            stop_reason: None,
            usage: None,
        }
    }

    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Consumes the response, returning its content.
    pub fn into_content(self) -> Content {
        self.content
    }
}
