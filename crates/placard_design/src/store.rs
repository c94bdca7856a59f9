//! In-memory conversation store.

use crate::{Conversation, ConversationId};
use placard_error::{ConversationError, ConversationErrorKind, PlacardResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};

/// Shared, individually lockable conversation.
pub type ConversationHandle = Arc<Mutex<Conversation>>;

/// Process-lifetime mapping from identifier to conversation.
///
/// The map lock is only held for lookups and structural changes. Each conversation has
/// its own mutex, which callers hold for the whole read-call-append cycle so requests
/// on one conversation are serialized while others proceed. Identifiers come from a
/// counter and are never reused. Nothing is persisted and nothing is evicted.
///
/// # Examples
///
/// ```
/// use placard_design::{Conversation, ConversationStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = ConversationStore::new();
///     let id = store.allocate_id();
///     store.insert(Conversation::new(id.clone())).await;
///     assert!(store.contains(&id).await);
///
///     store.delete(&id).await.unwrap();
///     assert!(store.delete(&id).await.is_err());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    /// Live conversations, keyed by ID
    conversations: Arc<RwLock<HashMap<ConversationId, ConversationHandle>>>,
    /// Next ID to assign
    next_id: Arc<AtomicU64>,
}

impl ConversationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a fresh identifier.
    pub fn allocate_id(&self) -> ConversationId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        ConversationId::new(id.to_string())
    }

    /// Registers a conversation under its own identifier.
    pub async fn insert(&self, conversation: Conversation) -> ConversationHandle {
        let id = conversation.id().clone();
        let handle = Arc::new(Mutex::new(conversation));
        self.conversations.write().await.insert(id, handle.clone());
        handle
    }

    /// Looks up a conversation.
    pub async fn get(&self, id: &ConversationId) -> PlacardResult<ConversationHandle> {
        self.conversations
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// True if the identifier names a live conversation.
    pub async fn contains(&self, id: &ConversationId) -> bool {
        self.conversations.read().await.contains_key(id)
    }

    /// Removes a conversation.
    pub async fn delete(&self, id: &ConversationId) -> PlacardResult<()> {
        match self.conversations.write().await.remove(id) {
            Some(_) => {
                tracing::debug!(conversation_id = %id, "Conversation deleted");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Copy of a conversation's current state.
    pub async fn snapshot(&self, id: &ConversationId) -> PlacardResult<Conversation> {
        let handle = self.get(id).await?;
        let conversation = handle.lock().await;
        Ok(conversation.clone())
    }

    /// Number of live conversations.
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.conversations.read().await.is_empty()
    }
}

fn not_found(id: &ConversationId) -> placard_error::PlacardError {
    ConversationError::new(ConversationErrorKind::NotFound(id.to_string())).into()
}
