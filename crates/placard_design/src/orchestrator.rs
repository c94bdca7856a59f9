//! The three-stage design conversation.

use crate::{
    BrandPrompt, Conversation, ConversationId, ConversationStore, GenerationSettings,
    ReplyStatus, RequestStage, prompts,
};
use placard_core::{Content, Message};
use placard_error::{
    ConversationError, ConversationErrorKind, ModelsError, ModelsErrorKind, PlacardResult,
};
use placard_interface::PlacardDriver;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A design request as received at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    /// Which stage to run
    pub stage: RequestStage,
    /// The user's text: the brief, the chosen option, or the requested change
    pub content: String,
    /// Conversation to continue
    pub conversation_id: Option<ConversationId>,
    /// LaTeX to update, overriding the recorded document
    pub latex: Option<String>,
}

/// Result of a design request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReply {
    /// Conversation the reply belongs to
    pub conversation_id: ConversationId,
    /// Model output, passed through unmodified
    pub content: Content,
    /// What the stage produced
    pub status: ReplyStatus,
}

/// Drives design conversations against a model, keeping the brand prompt in the system
/// context of every call.
///
/// A failed model call, including one that returns no text, leaves the conversation
/// exactly as it was.
pub struct DesignOrchestrator {
    driver: Arc<dyn PlacardDriver>,
    store: ConversationStore,
    brand: BrandPrompt,
    settings: GenerationSettings,
}

impl std::fmt::Debug for DesignOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignOrchestrator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl DesignOrchestrator {
    /// Creates an orchestrator over a driver and a store.
    pub fn new(
        driver: Arc<dyn PlacardDriver>,
        store: ConversationStore,
        brand: BrandPrompt,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            driver,
            store,
            brand,
            settings,
        }
    }

    /// The conversation store this orchestrator writes to.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Opens a conversation with the user's brief and returns the model's style options.
    #[instrument(skip(self, content), fields(stage = %RequestStage::Initial))]
    pub async fn start(&self, content: &str) -> PlacardResult<(ConversationId, Content)> {
        let id = self.store.allocate_id();
        let mut conversation = Conversation::new(id.clone());

        let user = Content::from(content);
        let reply = self
            .complete(RequestStage::Initial, conversation.with_pending(user.clone()))
            .await?;

        conversation.record_exchange(user, reply.clone());
        self.store.insert(conversation).await;

        info!(conversation_id = %id, "Conversation started");
        Ok((id, reply))
    }

    /// Commits to one of the offered options and returns the generated LaTeX.
    #[instrument(skip(self, id, choice), fields(stage = %RequestStage::StyleChoice, conversation_id = %id))]
    pub async fn choose_style(&self, id: &ConversationId, choice: &str) -> PlacardResult<Content> {
        let handle = self.store.get(id).await?;
        let mut conversation = handle.lock().await;

        let user = Content::Text(prompts::style_choice_turn(choice));
        let reply = self
            .complete(
                RequestStage::StyleChoice,
                conversation.with_pending(user.clone()),
            )
            .await?;

        conversation.record_exchange(user, reply.clone());
        conversation.set_latex(reply.text());

        info!(turns = conversation.len(), "LaTeX generated");
        Ok(reply)
    }

    /// Applies a requested change to the conversation's LaTeX.
    ///
    /// `latex` replaces the recorded document when given; otherwise the document from
    /// the last style choice or update is used. With neither, the request is rejected.
    #[instrument(skip(self, id, change, latex), fields(stage = %RequestStage::Update, conversation_id = %id))]
    pub async fn update(
        &self,
        id: &ConversationId,
        change: &str,
        latex: Option<&str>,
    ) -> PlacardResult<Content> {
        let handle = self.store.get(id).await?;
        let mut conversation = handle.lock().await;

        let current = match latex.filter(|l| !l.trim().is_empty()) {
            Some(supplied) => supplied.to_string(),
            None => conversation
                .latex()
                .clone()
                .filter(|l| !l.trim().is_empty())
                .ok_or_else(|| {
                    ConversationError::new(ConversationErrorKind::MissingLatex(id.to_string()))
                })?,
        };

        let user = Content::Text(prompts::update_turn(&current, change));
        let reply = self
            .complete(RequestStage::Update, conversation.with_pending(user.clone()))
            .await?;

        conversation.record_exchange(user, reply.clone());
        conversation.set_latex(reply.text());

        info!(turns = conversation.len(), "LaTeX updated");
        Ok(reply)
    }

    /// Forgets a conversation.
    #[instrument(skip(self, id), fields(conversation_id = %id))]
    pub async fn delete(&self, id: &ConversationId) -> PlacardResult<()> {
        self.store.delete(id).await
    }

    /// Validates a boundary request and runs its stage.
    ///
    /// A supplied but unknown conversation id is rejected before anything else, for
    /// every stage. Continuing stages without an id are rejected as incomplete.
    #[instrument(skip(self, request), fields(stage = %request.stage))]
    pub async fn handle(&self, request: DesignRequest) -> PlacardResult<DesignReply> {
        if let Some(id) = &request.conversation_id {
            if !self.store.contains(id).await {
                return Err(ConversationError::new(ConversationErrorKind::NotFound(
                    id.to_string(),
                ))
                .into());
            }
        }

        let stage = request.stage;
        let (conversation_id, content) = match stage {
            RequestStage::Initial => self.start(&request.content).await?,
            RequestStage::StyleChoice => {
                let id = required_id(stage, request.conversation_id)?;
                let content = self.choose_style(&id, &request.content).await?;
                (id, content)
            }
            RequestStage::Update => {
                let id = required_id(stage, request.conversation_id)?;
                let content = self
                    .update(&id, &request.content, request.latex.as_deref())
                    .await?;
                (id, content)
            }
        };

        Ok(DesignReply {
            conversation_id,
            content,
            status: stage.reply_status(),
        })
    }

    async fn complete(&self, stage: RequestStage, messages: Vec<Message>) -> PlacardResult<Content> {
        let request = self
            .settings
            .request(self.brand.system_for(stage), messages)?;

        debug!(
            provider = self.driver.provider_name(),
            messages = request.messages().len(),
            "Calling model"
        );

        let response = self.driver.generate(&request).await?;
        if let Some(usage) = response.usage() {
            debug!(
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                total_tokens = usage.total_tokens(),
                "Model usage"
            );
        }

        let content = response.into_content();
        if content.is_empty() {
            warn!(model = self.driver.model_name(), "Model returned no text");
            return Err(ModelsError::new(ModelsErrorKind::EmptyReply(
                self.driver.model_name().to_string(),
            ))
            .into());
        }
        Ok(content)
    }
}

fn required_id(stage: RequestStage, id: Option<ConversationId>) -> PlacardResult<ConversationId> {
    id.ok_or_else(|| {
        ConversationError::new(ConversationErrorKind::MissingConversationId(stage.to_string()))
            .into()
    })
}
