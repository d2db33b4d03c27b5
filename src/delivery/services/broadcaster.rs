//! Broadcast fan-out of a finalised message to every live connection.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::delivery::{
    domain::{ConnectionId, TransportEndpoint},
    ports::{registry::ConnectionRegistry, transport::ConnectionTransport},
};
use crate::message::domain::Message;

/// Tally of one broadcast fan-out.
///
/// Delivery is at-least-once best-effort: the tally exists for logging and
/// tests, not for retry decisions. This core performs no per-recipient
/// retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastOutcome {
    attempted: usize,
    delivered: usize,
    pruned: usize,
    failed: usize,
}

impl BroadcastOutcome {
    /// Returns the number of delivery attempts issued.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.attempted
    }

    /// Returns the number of successful deliveries.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }

    /// Returns the number of stale connections pruned.
    #[must_use]
    pub const fn pruned(&self) -> usize {
        self.pruned
    }

    /// Returns the number of attempts that failed for other reasons.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }
}

/// Per-recipient delivery result, folded into the outcome tally.
enum DeliveryStatus {
    Delivered,
    Pruned,
    Failed,
}

/// Service that pushes a finalised message record to the set of live
/// connections on its conversation.
///
/// Every delivery error is caught and logged per recipient; the broadcast
/// itself never fails. The originating connection is deliberately included
/// so the sender receives the canonical persisted record rather than
/// relying on its own optimistic local echo.
///
/// # Example
///
/// ```ignore
/// use switchboard::delivery::services::Broadcaster;
///
/// let broadcaster = Broadcaster::new(registry, transport);
/// let outcome = broadcaster.broadcast(&message, &endpoint, &origin).await;
/// tracing::info!(delivered = outcome.delivered(), "broadcast complete");
/// ```
#[derive(Clone)]
pub struct Broadcaster<R, T>
where
    R: ConnectionRegistry,
    T: ConnectionTransport,
{
    registry: Arc<R>,
    transport: Arc<T>,
}

impl<R, T> Broadcaster<R, T>
where
    R: ConnectionRegistry,
    T: ConnectionTransport,
{
    /// Creates a broadcaster over a registry and push transport.
    pub const fn new(registry: Arc<R>, transport: Arc<T>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Fans the message out to every live connection on its conversation.
    ///
    /// The payload is serialised once to the canonical wire JSON. Fan-out is
    /// one independent, concurrently-issued attempt per connection: one
    /// recipient failing never prevents or delays attempts to the others.
    /// A gone signal prunes that connection from the registry within its own
    /// fan-out branch; prune failures are logged and dropped.
    ///
    /// Registry and serialisation failures are absorbed with a logged empty
    /// outcome: delivery is best-effort and must never fail the caller.
    pub async fn broadcast(
        &self,
        message: &Message,
        endpoint: &TransportEndpoint,
        origin: &ConnectionId,
    ) -> BroadcastOutcome {
        let payload = match message.to_wire_json() {
            Ok(payload) => payload,
            Err(error) => {
                warn!(
                    message_id = %message.message_id(),
                    %error,
                    "message could not be serialised for broadcast"
                );
                return BroadcastOutcome::default();
            }
        };

        let connections = match self.registry.live_connections(message.conversation_id()).await {
            Ok(connections) => connections,
            Err(error) => {
                warn!(
                    conversation_id = %message.conversation_id(),
                    %error,
                    "live connections could not be resolved; skipping broadcast"
                );
                return BroadcastOutcome::default();
            }
        };

        debug!(
            conversation_id = %message.conversation_id(),
            recipients = connections.len(),
            origin = %origin,
            "broadcasting message"
        );

        // The origin stays in the recipient set on purpose: the sender gets
        // the canonical persisted record, not just its local echo.
        let attempts = connections
            .iter()
            .map(|connection| self.deliver(endpoint, connection, &payload));
        let statuses = join_all(attempts).await;

        let mut outcome = BroadcastOutcome {
            attempted: connections.len(),
            ..BroadcastOutcome::default()
        };
        for status in statuses {
            match status {
                DeliveryStatus::Delivered => outcome.delivered += 1,
                DeliveryStatus::Pruned => outcome.pruned += 1,
                DeliveryStatus::Failed => outcome.failed += 1,
            }
        }
        outcome
    }

    async fn deliver(
        &self,
        endpoint: &TransportEndpoint,
        connection: &ConnectionId,
        payload: &str,
    ) -> DeliveryStatus {
        match self.transport.push(endpoint, connection, payload).await {
            Ok(()) => {
                debug!(connection = %connection, "message delivered");
                DeliveryStatus::Delivered
            }
            Err(error) if error.is_gone() => {
                debug!(connection = %connection, "stale connection; pruning");
                if let Err(prune_error) = self.registry.prune(connection).await {
                    warn!(
                        connection = %connection,
                        error = %prune_error,
                        "stale connection could not be pruned"
                    );
                }
                DeliveryStatus::Pruned
            }
            Err(error) => {
                warn!(connection = %connection, %error, "delivery failed");
                DeliveryStatus::Failed
            }
        }
    }
}
