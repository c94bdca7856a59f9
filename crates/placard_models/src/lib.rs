//! LLM provider integrations for Placard.
//!
//! Each provider module converts [`placard_core`] requests into its wire format and
//! implements [`placard_interface::PlacardDriver`].

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicConfig, AnthropicConfigBuilder, AnthropicContent,
    AnthropicContentBlock, AnthropicDocumentSource, AnthropicMessage,
    AnthropicMessageContent, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage, DEFAULT_ANTHROPIC_ENDPOINT, DEFAULT_ANTHROPIC_MODEL,
};
