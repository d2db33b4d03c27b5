//! Port for agent binding lookup.
//!
//! Bindings are created by an out-of-band provisioning flow; this core only
//! reads them. Because a binding is immutable for the conversation's
//! lifetime, an implementation may cache lookups indefinitely.

use crate::agent::domain::AgentBinding;
use crate::message::domain::ConversationId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for binding lookups.
pub type BindingResult<T> = Result<T, BindingError>;

/// Agent binding lookup contract.
#[async_trait]
pub trait AgentBindingRepository: Send + Sync {
    /// Finds the agent binding for a conversation.
    ///
    /// Returns `None` when the conversation has no binding; the caller
    /// decides whether that is an error (it is, for message routing).
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Persistence`] on infrastructure failure.
    async fn find_by_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> BindingResult<Option<AgentBinding>>;
}

/// Errors returned by binding repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BindingError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BindingError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
