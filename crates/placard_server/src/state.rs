//! Shared handler state.

use crate::PlacardConfig;
use placard_design::{BrandAnalyzer, ConversationStore, DesignOrchestrator, HttpDocumentFetcher};
use placard_error::PlacardResult;
use placard_interface::PlacardDriver;
use placard_models::AnthropicClient;
use std::sync::Arc;

/// Collaborators shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Design conversation orchestrator
    pub orchestrator: Arc<DesignOrchestrator>,
    /// Brand guideline analyzer
    pub analyzer: Arc<BrandAnalyzer>,
}

impl AppState {
    /// Creates state from ready-made collaborators.
    pub fn new(orchestrator: DesignOrchestrator, analyzer: BrandAnalyzer) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            analyzer: Arc::new(analyzer),
        }
    }

    /// Wires the orchestrator and analyzer around one driver, using the configured
    /// brand prompt and output budgets.
    pub fn with_driver(config: &PlacardConfig, driver: Arc<dyn PlacardDriver>) -> PlacardResult<Self> {
        let brand = config.brand_prompt()?;
        tracing::info!(
            provider = driver.provider_name(),
            brand_prompt_chars = brand.as_str().len(),
            "Brand prompt loaded"
        );

        let orchestrator = DesignOrchestrator::new(
            driver.clone(),
            ConversationStore::new(),
            brand,
            config.design_settings(),
        );
        let analyzer = BrandAnalyzer::new(
            driver,
            HttpDocumentFetcher::new(config.fetch_timeout())?,
            config.analysis_settings(),
        );
        Ok(Self::new(orchestrator, analyzer))
    }

    /// Builds state backed by the Anthropic Messages API.
    pub fn from_config(config: &PlacardConfig, api_key: Option<&str>) -> PlacardResult<Self> {
        let client = AnthropicClient::new(config.anthropic_config(api_key)?)?;
        Self::with_driver(config, Arc::new(client))
    }
}
