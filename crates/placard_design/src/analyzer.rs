//! Brand guideline analysis.

use crate::{GenerationSettings, HttpDocumentFetcher, prompts};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use placard_core::{Content, ContentBlock, Message};
use placard_error::{
    AnalysisError, AnalysisErrorKind, ModelsError, ModelsErrorKind, PlacardResult,
};
use placard_interface::PlacardDriver;
use std::sync::Arc;
use tracing::{info, instrument};

/// Media type attached to downloaded guideline documents.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Turns a brand guideline PDF into a system prompt with one model call.
///
/// Stateless: nothing from an analysis is kept.
pub struct BrandAnalyzer {
    driver: Arc<dyn PlacardDriver>,
    fetcher: HttpDocumentFetcher,
    settings: GenerationSettings,
}

impl std::fmt::Debug for BrandAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandAnalyzer")
            .field("provider", &self.driver.provider_name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl BrandAnalyzer {
    /// Creates an analyzer.
    pub fn new(
        driver: Arc<dyn PlacardDriver>,
        fetcher: HttpDocumentFetcher,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            driver,
            fetcher,
            settings,
        }
    }

    /// Downloads the document at `document_url` and asks the model to extract a brand
    /// prompt from it. `brand_name` is mentioned in the accompanying note when given.
    ///
    /// Failures of either step come back as a single [`AnalysisError`].
    #[instrument(skip(self, brand_name), fields(brand = brand_name.unwrap_or("-")))]
    pub async fn analyze(&self, document_url: &str, brand_name: Option<&str>) -> PlacardResult<String> {
        let bytes = self
            .fetcher
            .fetch(document_url)
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Fetch(e)))?;

        let prompt = self
            .extract_prompt(&bytes, brand_name)
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Model(e.detail())))?;

        info!(
            document_bytes = bytes.len(),
            prompt_chars = prompt.len(),
            "Brand guidelines analyzed"
        );
        Ok(prompt)
    }

    async fn extract_prompt(&self, document: &[u8], brand_name: Option<&str>) -> PlacardResult<String> {
        let message = Message::user(Content::Blocks(vec![
            ContentBlock::document(PDF_MEDIA_TYPE, STANDARD.encode(document)),
            ContentBlock::text(prompts::analysis_note(brand_name)),
        ]));

        let request = self
            .settings
            .request(prompts::ANALYSIS_PROMPT.to_string(), vec![message])?;

        let content = self.driver.generate(&request).await?.into_content();
        if content.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyReply(
                self.driver.model_name().to_string(),
            ))
            .into());
        }
        Ok(content.text())
    }
}
