//! Port for the live-connection registry.
//!
//! The registry is owned by an external store and populated by the
//! connect/disconnect handlers outside this core. This core reads the live
//! set per conversation and prunes entries the transport reports as gone.

use crate::delivery::domain::ConnectionId;
use crate::message::domain::ConversationId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Live-connection registry contract.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Returns the connections currently believed live for a conversation.
    ///
    /// Returns an empty vector when nobody is connected.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] on infrastructure failure.
    async fn live_connections(
        &self,
        conversation_id: &ConversationId,
    ) -> RegistryResult<Vec<ConnectionId>>;

    /// Removes a connection the transport reported as gone.
    ///
    /// Pruning is best-effort: callers treat failures as log-and-continue.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] on infrastructure failure.
    async fn prune(&self, connection_id: &ConnectionId) -> RegistryResult<()>;
}

/// Errors returned by registry implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
