//! Conversions between Placard core types and the Anthropic wire format.

use super::types::{
    AnthropicContentBlock, AnthropicDocumentSource, AnthropicMessage, AnthropicMessageContent,
    AnthropicResponse,
};
use placard_core::{Content, ContentBlock, GenerateResponse, Message, TokenUsageData};
use placard_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind};

impl From<&ContentBlock> for AnthropicContentBlock {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => AnthropicContentBlock::Text { text: text.clone() },
            ContentBlock::Document { media_type, data } => AnthropicContentBlock::Document {
                source: AnthropicDocumentSource::base64(media_type.clone(), data.clone()),
            },
        }
    }
}

impl From<&Content> for AnthropicMessageContent {
    fn from(content: &Content) -> Self {
        match content {
            Content::Text(text) => AnthropicMessageContent::Text(text.clone()),
            Content::Blocks(blocks) => {
                AnthropicMessageContent::Blocks(blocks.iter().map(Into::into).collect())
            }
        }
    }
}

impl From<&Message> for AnthropicMessage {
    fn from(message: &Message) -> Self {
        AnthropicMessage::new(message.role().to_string(), message.content().into())
    }
}

impl TryFrom<AnthropicResponse> for GenerateResponse {
    type Error = ModelsError;

    fn try_from(response: AnthropicResponse) -> Result<Self, Self::Error> {
        // Only text blocks are surfaced; anything else the API adds is dropped.
        let blocks = response
            .content()
            .iter()
            .filter(|c| c.content_type() == "text")
            .map(|c| ContentBlock::text(c.text().clone()))
            .collect::<Vec<_>>();

        let usage = response.usage().as_ref().map(|u| {
            TokenUsageData::new(u64::from(*u.input_tokens()), u64::from(*u.output_tokens()))
        });

        GenerateResponse::builder()
            .content(Content::Blocks(blocks))
            .model(Some(response.model().clone()))
            .stop_reason(response.stop_reason().clone())
            .usage(usage)
            .build()
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::Parse(
                    e.to_string(),
                )))
            })
    }
}
