mod client;
mod conversions;
mod types;

pub use client::{
    AnthropicClient, AnthropicConfig, AnthropicConfigBuilder, DEFAULT_ANTHROPIC_ENDPOINT,
    DEFAULT_ANTHROPIC_MODEL,
};
pub use types::{
    AnthropicContent, AnthropicContentBlock, AnthropicDocumentSource, AnthropicMessage,
    AnthropicMessageContent, AnthropicRequest, AnthropicRequestBuilder,
    AnthropicResponse, AnthropicUsage,
};
