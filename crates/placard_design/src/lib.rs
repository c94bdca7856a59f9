//! Conversation orchestration and brand analysis for Placard.
//!
//! A design conversation runs through three stages: the user describes what they need
//! and the model offers on-brand style options ([`RequestStage::Initial`]), the user
//! picks one and the model writes LaTeX ([`RequestStage::StyleChoice`]), and then the
//! user asks for targeted edits ([`RequestStage::Update`]). The brand prompt stays in
//! the system instruction for every call.
//!
//! [`BrandAnalyzer`] is the one-shot side path that turns a brand guideline PDF into a
//! new brand prompt.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyzer;
mod conversation;
mod fetch;
mod orchestrator;
mod prompts;
mod settings;
mod stage;
mod store;

pub use analyzer::{BrandAnalyzer, PDF_MEDIA_TYPE};
pub use conversation::{Conversation, ConversationId};
pub use fetch::HttpDocumentFetcher;
pub use orchestrator::{DesignOrchestrator, DesignReply, DesignRequest};
pub use prompts::{
    ANALYSIS_PROMPT, BrandPrompt, DEFAULT_BRAND_PROMPT, analysis_note, style_choice_turn,
    update_turn,
};
pub use settings::{GenerationSettings, GenerationSettingsBuilder};
pub use stage::{ReplyStatus, RequestStage};
pub use store::{ConversationHandle, ConversationStore};
