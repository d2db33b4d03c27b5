//! Message-store port: append-only persistence keyed by message identifier.
//!
//! The store itself is owned by an external system; this core only appends
//! immutable records and queries them by conversation for history display.

use crate::message::domain::{ConversationId, Message, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Message persistence contract.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Records are immutable once written
/// - `find_by_conversation` returns records sorted by `sent_at`, with ties
///   broken by insertion order
/// - Conditional writes are not required: identifiers are server-generated,
///   so no uniqueness races are expected
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends an immutable message record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] when the message identifier already
    /// exists or [`StoreError::Persistence`] on infrastructure failure.
    async fn put(&self, message: &Message) -> StoreResult<()>;

    /// Returns the records for a conversation in display order.
    ///
    /// Returns an empty vector when the conversation has no messages.
    async fn find_by_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> StoreResult<Vec<Message>>;
}

/// Errors returned by message-store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    Duplicate(MessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
