//! In-memory implementations of the delivery ports.
//!
//! [`InMemoryConnectionRegistry`] stands in for the external connection
//! store; [`RecordingTransport`] records every push and can be scripted to
//! fail specific connections. Suitable for unit tests only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::delivery::{
    domain::{ConnectionId, TransportEndpoint},
    ports::{
        registry::{ConnectionRegistry, RegistryError, RegistryResult},
        transport::{ConnectionTransport, DeliveryError, DeliveryResult},
    },
};
use crate::message::domain::ConversationId;

/// Thread-safe in-memory connection registry.
///
/// Connections are kept per conversation in registration order, which keeps
/// fan-out assertions deterministic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryConnectionRegistry {
    connections: Arc<RwLock<HashMap<ConversationId, Vec<ConnectionId>>>>,
}

impl InMemoryConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a live connection for a conversation, standing in for the
    /// external connect handler.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] if the lock is poisoned.
    pub fn register(
        &self,
        conversation_id: ConversationId,
        connection_id: ConnectionId,
    ) -> RegistryResult<()> {
        let mut guard = self
            .connections
            .write()
            .map_err(|e| RegistryError::persistence(std::io::Error::other(e.to_string())))?;

        let entries = guard.entry(conversation_id).or_default();
        if !entries.contains(&connection_id) {
            entries.push(connection_id);
        }
        Ok(())
    }

    /// Returns `true` when the connection is still registered anywhere.
    #[must_use]
    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.connections
            .read()
            .map(|guard| guard.values().any(|c| c.contains(connection_id)))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn live_connections(
        &self,
        conversation_id: &ConversationId,
    ) -> RegistryResult<Vec<ConnectionId>> {
        let guard = self
            .connections
            .read()
            .map_err(|e| RegistryError::persistence(std::io::Error::other(e.to_string())))?;

        Ok(guard.get(conversation_id).cloned().unwrap_or_default())
    }

    async fn prune(&self, connection_id: &ConnectionId) -> RegistryResult<()> {
        let mut guard = self
            .connections
            .write()
            .map_err(|e| RegistryError::persistence(std::io::Error::other(e.to_string())))?;

        for entries in guard.values_mut() {
            entries.retain(|c| c != connection_id);
        }
        Ok(())
    }
}

/// How a scripted connection fails delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureMode {
    Gone,
    Transport,
}

#[derive(Debug, Default)]
struct TransportState {
    deliveries: Vec<(ConnectionId, String)>,
    failures: HashMap<ConnectionId, FailureMode>,
}

/// Push transport that records every delivery and can be scripted to fail
/// specific connections.
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    state: Arc<RwLock<TransportState>>,
}

impl RecordingTransport {
    /// Creates a transport that accepts every push.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the connection to fail with the gone signal.
    pub fn fail_with_gone(&self, connection_id: ConnectionId) {
        if let Ok(mut state) = self.state.write() {
            state.failures.insert(connection_id, FailureMode::Gone);
        }
    }

    /// Scripts the connection to fail with a generic transport error.
    pub fn fail_with_error(&self, connection_id: ConnectionId) {
        if let Ok(mut state) = self.state.write() {
            state.failures.insert(connection_id, FailureMode::Transport);
        }
    }

    /// Returns every successful delivery as `(connection, payload)` pairs.
    #[must_use]
    pub fn deliveries(&self) -> Vec<(ConnectionId, String)> {
        self.state
            .read()
            .map(|state| state.deliveries.clone())
            .unwrap_or_default()
    }

    /// Returns the payloads delivered to one connection.
    #[must_use]
    pub fn payloads_for(&self, connection_id: &ConnectionId) -> Vec<String> {
        self.deliveries()
            .into_iter()
            .filter(|(c, _)| c == connection_id)
            .map(|(_, payload)| payload)
            .collect()
    }
}

#[async_trait]
impl ConnectionTransport for RecordingTransport {
    async fn push(
        &self,
        _endpoint: &TransportEndpoint,
        connection_id: &ConnectionId,
        payload: &str,
    ) -> DeliveryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| DeliveryError::transport(std::io::Error::other(e.to_string())))?;

        match state.failures.get(connection_id) {
            Some(FailureMode::Gone) => Err(DeliveryError::ConnectionGone(connection_id.clone())),
            Some(FailureMode::Transport) => Err(DeliveryError::transport(std::io::Error::other(
                "scripted transport failure",
            ))),
            None => {
                state
                    .deliveries
                    .push((connection_id.clone(), payload.to_owned()));
                Ok(())
            }
        }
    }
}
