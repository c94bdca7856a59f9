//! HTTP client for the Anthropic Messages API.

use super::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use placard_core::{GenerateRequest, GenerateResponse};
use placard_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind, PlacardResult};
use placard_interface::PlacardDriver;
use std::time::Duration;

/// Public Anthropic endpoint.
pub const DEFAULT_ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com";

/// Model used when neither the config nor the request names one.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API configuration.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key`
    api_key: String,
    /// Base URL, without the `/v1/messages` path
    #[builder(default = "DEFAULT_ANTHROPIC_ENDPOINT.to_string()")]
    endpoint: String,
    /// Default model identifier
    #[builder(default = "DEFAULT_ANTHROPIC_MODEL.to_string()")]
    model: String,
    /// Default output budget
    #[builder(default = "1024")]
    max_tokens: u32,
    /// Upper bound for a whole request, connect to last byte
    #[builder(default = "Duration::from_secs(120)")]
    timeout: Duration,
}

impl AnthropicConfig {
    /// Creates a builder for AnthropicConfig.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }
}

/// Anthropic HTTP client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    #[tracing::instrument(skip(config), fields(endpoint = %config.endpoint(), model = %config.model()))]
    pub fn new(config: AnthropicConfig) -> PlacardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::Http(
                    e.to_string(),
                )))
            })?;

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Converts a provider-neutral request, filling in configured defaults.
    pub fn build_request(&self, request: &GenerateRequest) -> PlacardResult<AnthropicRequest> {
        let model = request
            .model()
            .clone()
            .unwrap_or_else(|| self.config.model().clone());
        let max_tokens = request.max_tokens().unwrap_or(*self.config.max_tokens());

        let messages = request
            .messages()
            .iter()
            .map(AnthropicMessage::from)
            .collect::<Vec<_>>();

        let anthropic_request = AnthropicRequest::builder()
            .model(model)
            .messages(messages)
            .max_tokens(max_tokens)
            .system(request.system().clone())
            .build()
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Anthropic(
                    AnthropicErrorKind::InvalidRequest(e.to_string()),
                ))
            })?;

        Ok(anthropic_request)
    }

    /// Sends a raw request to the Messages API.
    #[tracing::instrument(skip(self, request), fields(model = %request.model(), messages = request.messages().len()))]
    pub async fn send(&self, request: &AnthropicRequest) -> PlacardResult<AnthropicResponse> {
        let url = format!("{}/v1/messages", self.config.endpoint().trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::Http(
                    e.to_string(),
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Anthropic API returned an error");
            return Err(ModelsError::new(ModelsErrorKind::Anthropic(
                AnthropicErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            ))
            .into());
        }

        let parsed = response.json::<AnthropicResponse>().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::Parse(
                e.to_string(),
            )))
        })?;

        tracing::debug!(
            id = %parsed.id(),
            stop_reason = ?parsed.stop_reason(),
            blocks = parsed.content().len(),
            "Anthropic response received"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl PlacardDriver for AnthropicClient {
    async fn generate(&self, request: &GenerateRequest) -> PlacardResult<GenerateResponse> {
        let anthropic_request = self.build_request(request)?;
        let response = self.send(&anthropic_request).await?;
        Ok(GenerateResponse::try_from(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
