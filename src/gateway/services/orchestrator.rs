//! The message orchestrator: one inbound event in, one acknowledgement out.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, error, info, warn};

use crate::agent::{
    domain::SessionKey,
    ports::{binding_repository::AgentBindingRepository, connector::AgentConnector},
    services::AgentInvoker,
};
use crate::delivery::{
    domain::{ConnectionId, TransportEndpoint},
    ports::{registry::ConnectionRegistry, transport::ConnectionTransport},
    services::Broadcaster,
};
use crate::gateway::domain::{InboundEvent, MessagePayload, Payload, ProtocolResponse};
use crate::message::{
    domain::{Message, Sender},
    ports::store::MessageStore,
};

/// Top-level coordinator for the message pipeline.
///
/// For each inbound `Message` event the orchestrator persists the user
/// turn, broadcasts it, invokes the bound agent with the caller's session
/// key, persists and broadcasts the reassembled reply, and returns a
/// protocol acknowledgement. The reply is delivered exclusively via
/// broadcast, which includes the originating connection; it never travels
/// back through the request/response channel.
///
/// All collaborators are injected at construction; the orchestrator holds
/// no other state and events may be processed concurrently, including for
/// the same conversation. Processing within one event is sequential: the
/// user turn is durable (or the request has failed) before the agent is
/// invoked, and no lock is held across the invocation.
///
/// # Example
///
/// ```ignore
/// use switchboard::gateway::services::MessageOrchestrator;
///
/// let orchestrator = MessageOrchestrator::new(store, bindings, broadcaster, invoker, clock);
/// let response = orchestrator.handle_json(&frame).await;
/// ```
#[derive(Clone)]
pub struct MessageOrchestrator<S, B, R, T, C, K>
where
    S: MessageStore,
    B: AgentBindingRepository,
    R: ConnectionRegistry,
    T: ConnectionTransport,
    C: AgentConnector,
    K: Clock + Send + Sync,
{
    store: Arc<S>,
    bindings: Arc<B>,
    broadcaster: Broadcaster<R, T>,
    invoker: AgentInvoker<C>,
    clock: Arc<K>,
}

impl<S, B, R, T, C, K> MessageOrchestrator<S, B, R, T, C, K>
where
    S: MessageStore,
    B: AgentBindingRepository,
    R: ConnectionRegistry,
    T: ConnectionTransport,
    C: AgentConnector,
    K: Clock + Send + Sync,
{
    /// Creates an orchestrator from its injected collaborators.
    pub const fn new(
        store: Arc<S>,
        bindings: Arc<B>,
        broadcaster: Broadcaster<R, T>,
        invoker: AgentInvoker<C>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            store,
            bindings,
            broadcaster,
            invoker,
            clock,
        }
    }

    /// Parses a raw transport frame and handles the event.
    ///
    /// An unparseable frame is acknowledged with a server-error response;
    /// it is never retried by this core.
    pub async fn handle_json(&self, raw: &str) -> ProtocolResponse {
        match InboundEvent::from_json(raw) {
            Ok(event) => self.handle(&event).await,
            Err(parse_error) => {
                warn!(error = %parse_error, "inbound event could not be parsed");
                ProtocolResponse::server_error(format!("malformed event: {parse_error}"))
            }
        }
    }

    /// Handles one parsed inbound event.
    ///
    /// Only `Message` payloads are processed; every other payload type is
    /// acknowledged as a logged no-op. Every exit path returns a response;
    /// nothing in the pipeline panics or escapes.
    pub async fn handle(&self, event: &InboundEvent) -> ProtocolResponse {
        let Payload::Message(payload) = event.body().data() else {
            info!("unrecognised payload type; ignoring");
            return ProtocolResponse::ok();
        };

        self.process_message(
            payload,
            event.identity().principal(),
            event.request_context().connection_id(),
            &event.request_context().endpoint(),
        )
        .await
    }

    async fn process_message(
        &self,
        payload: &MessagePayload,
        principal: &str,
        origin: &ConnectionId,
        endpoint: &TransportEndpoint,
    ) -> ProtocolResponse {
        let conversation_id = payload.conversation_id();

        // Resolve the binding before any write so an unroutable
        // conversation leaves no partial record behind.
        let binding = match self.bindings.find_by_conversation(conversation_id).await {
            Ok(Some(binding)) => binding,
            Ok(None) => {
                warn!(conversation_id = %conversation_id, "no agent binding for conversation");
                return ProtocolResponse::not_found(format!(
                    "no agent binding for conversation '{conversation_id}'"
                ));
            }
            Err(lookup_error) => {
                error!(
                    conversation_id = %conversation_id,
                    error = %lookup_error,
                    "agent binding lookup failed"
                );
                return ProtocolResponse::server_error(format!(
                    "agent binding lookup failed: {lookup_error}"
                ));
            }
        };

        // Step 1: the user turn is the record of truth, so persistence
        // failure here is fatal for the request and the agent is never
        // invoked.
        let sender = payload
            .sender()
            .map_or_else(|| Sender::user(principal), Sender::from);
        let user_turn = Message::user_turn(
            conversation_id.clone(),
            sender,
            payload.text(),
            payload.sent_at(),
            self.clock.as_ref(),
        );

        if let Err(store_error) = self.store.put(&user_turn).await {
            error!(
                message_id = %user_turn.message_id(),
                error = %store_error,
                "user turn could not be persisted"
            );
            return ProtocolResponse::server_error(format!(
                "user turn could not be persisted: {store_error}"
            ));
        }

        let outcome = self.broadcaster.broadcast(&user_turn, endpoint, origin).await;
        debug!(
            message_id = %user_turn.message_id(),
            delivered = outcome.delivered(),
            pruned = outcome.pruned(),
            "user turn broadcast"
        );

        // Step 2: invoke the agent on the caller's session and deliver the
        // reply by broadcast only.
        let session = SessionKey::derive(origin, principal);
        match self.invoker.invoke(&binding, &session, payload.text()).await {
            Ok(reply) => {
                self.finish_agent_turn(payload, endpoint, origin, reply)
                    .await;
            }
            Err(invocation_error) => {
                // The user turn stands; the caller still gets a success
                // acknowledgement.
                error!(
                    conversation_id = %conversation_id,
                    error = %invocation_error,
                    "agent invocation failed; no agent turn produced"
                );
            }
        }

        ProtocolResponse::ok()
    }

    async fn finish_agent_turn(
        &self,
        payload: &MessagePayload,
        endpoint: &TransportEndpoint,
        origin: &ConnectionId,
        reply: String,
    ) {
        let agent_turn = Message::agent_turn(
            payload.conversation_id().clone(),
            reply,
            self.clock.as_ref(),
        );

        // Persistence failure for the agent turn is non-fatal: live clients
        // outrank the store, so the turn is still broadcast.
        if let Err(store_error) = self.store.put(&agent_turn).await {
            error!(
                message_id = %agent_turn.message_id(),
                error = %store_error,
                "agent turn could not be persisted; broadcasting anyway"
            );
        }

        let outcome = self.broadcaster.broadcast(&agent_turn, endpoint, origin).await;
        debug!(
            message_id = %agent_turn.message_id(),
            delivered = outcome.delivered(),
            pruned = outcome.pruned(),
            "agent turn broadcast"
        );
    }
}
