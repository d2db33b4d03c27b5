//! Port for point-to-point message push over the duplex transport.

use crate::delivery::domain::{ConnectionId, TransportEndpoint};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for delivery attempts.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Point-to-point push contract keyed by connection identifier.
#[async_trait]
pub trait ConnectionTransport: Send + Sync {
    /// Pushes a serialised payload to one connection.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::ConnectionGone`] when the transport reports
    /// the connection closed (the 410-class signal), or
    /// [`DeliveryError::Transport`] for any other failure.
    async fn push(
        &self,
        endpoint: &TransportEndpoint,
        connection_id: &ConnectionId,
        payload: &str,
    ) -> DeliveryResult<()>;
}

/// Errors returned by delivery attempts.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// The transport reported the connection as gone; the connection is a
    /// candidate for pruning from the registry.
    #[error("connection {0} is gone")]
    ConnectionGone(ConnectionId),

    /// Any other transport failure.
    #[error("delivery transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeliveryError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when the failure signals a stale connection.
    #[must_use]
    pub const fn is_gone(&self) -> bool {
        matches!(self, Self::ConnectionGone(_))
    }
}
