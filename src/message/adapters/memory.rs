//! In-memory implementation of the [`MessageStore`] port.
//!
//! Provides a simple, thread-safe store for unit testing without external
//! dependencies.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{ConversationId, Message},
    ports::store::{MessageStore, StoreError, StoreResult},
};

/// Thread-safe in-memory message store.
///
/// Records are kept per conversation in insertion order, so the display
/// sort (timestamp, ties broken by insertion order) falls out of a stable
/// sort. Suitable for unit tests only.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    /// Per-conversation records in insertion order.
    conversations: HashMap<ConversationId, Vec<Message>>,
    /// Count of all records across conversations.
    total: usize,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records across all conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|guard| guard.total).unwrap_or(0)
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn put(&self, message: &Message) -> StoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| StoreError::persistence(std::io::Error::other(e.to_string())))?;

        let records = state
            .conversations
            .entry(message.conversation_id().clone())
            .or_default();

        if records
            .iter()
            .any(|r| r.message_id() == message.message_id())
        {
            return Err(StoreError::Duplicate(message.message_id()));
        }

        records.push(message.clone());
        state.total += 1;
        Ok(())
    }

    async fn find_by_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> StoreResult<Vec<Message>> {
        let state = self
            .state
            .read()
            .map_err(|e| StoreError::persistence(std::io::Error::other(e.to_string())))?;

        let mut records = state
            .conversations
            .get(conversation_id)
            .cloned()
            .unwrap_or_default();

        // Stable sort keeps insertion order for equal timestamps.
        records.sort_by_key(Message::sent_at);

        Ok(records)
    }
}
