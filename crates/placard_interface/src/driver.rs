//! The seam between conversation logic and an LLM provider.

use async_trait::async_trait;
use placard_core::{GenerateRequest, GenerateResponse};
use placard_error::PlacardResult;

/// An LLM backend capable of completing a conversation.
///
/// Implementations receive the system instruction and the full ordered turn list in a
/// single [`GenerateRequest`] and return whatever content the model produced. No retry
/// policy is expected of implementors.
#[async_trait]
pub trait PlacardDriver: Send + Sync {
    /// Generate a reply for the request.
    async fn generate(&self, request: &GenerateRequest) -> PlacardResult<GenerateResponse>;

    /// Short provider name, used in logs.
    fn provider_name(&self) -> &'static str;

    /// Model used when a request does not name one.
    fn model_name(&self) -> &str;
}

