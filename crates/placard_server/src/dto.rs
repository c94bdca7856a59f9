//! Request and response bodies.

use placard_core::Message;
use placard_design::{Conversation, ConversationId, DesignRequest, RequestStage};
use placard_error::PlacardResult;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-latex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateLatexBody {
    /// `initial`, `style-choice` (or `style_choice`) or `update`
    pub request_type: String,
    /// The brief, the chosen option, or the requested change
    pub content: String,
    /// Conversation to continue
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// LaTeX to update
    #[serde(default)]
    pub latex: Option<String>,
}

impl GenerateLatexBody {
    /// Parses the stage and normalizes optional fields. Blank ids count as absent.
    pub fn into_design_request(self) -> PlacardResult<DesignRequest> {
        let stage = RequestStage::parse(&self.request_type)?;
        let conversation_id = self
            .conversation_id
            .filter(|id| !id.trim().is_empty())
            .map(ConversationId::new);

        Ok(DesignRequest {
            stage,
            content: self.content,
            conversation_id,
            latex: self.latex,
        })
    }
}

/// Body of `POST /analyze-brand-guidelines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeBody {
    /// Where to download the guideline PDF
    pub pdf_url: String,
    /// Brand named in the analysis note
    #[serde(default)]
    pub brand_name: Option<String>,
}

/// Successful brand analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always `success`
    pub status: String,
    /// Generated brand prompt
    pub system_prompt: String,
}

impl AnalyzeResponse {
    /// Wraps a generated prompt.
    pub fn success(system_prompt: String) -> Self {
        Self {
            status: "success".to_string(),
            system_prompt,
        }
    }
}

/// Successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `deleted`
    pub status: String,
}

impl DeleteResponse {
    /// The one possible delete response.
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// Read-only view of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationView {
    /// Identifier
    pub conversation_id: ConversationId,
    /// Turns in order
    pub turns: Vec<Message>,
    /// Current LaTeX document, if any
    pub latex: Option<String>,
}

impl From<Conversation> for ConversationView {
    fn from(conversation: Conversation) -> Self {
        Self {
            conversation_id: conversation.id().clone(),
            turns: conversation.turns().clone(),
            latex: conversation.latex().clone(),
        }
    }
}
