//! The inbound event envelope delivered by the transport layer.
//!
//! One envelope arrives per transport frame. The authenticated principal is
//! bound to the connection by the excluded auth collaborator at connect
//! time; the request context identifies the connection and the push
//! endpoint; the body carries a type-tagged payload of which only the
//! `"Message"` type is processed by this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::delivery::domain::{ConnectionId, TransportEndpoint};
use crate::message::domain::ConversationId;

/// Identity bound to the connection at connect time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    /// The authenticated principal.
    principal: String,
}

impl CallerIdentity {
    /// Creates an identity for a principal.
    #[must_use]
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
        }
    }

    /// Returns the authenticated principal.
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }
}

/// Transport-level context for one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// The originating connection.
    connection_id: ConnectionId,

    /// The transport's domain name, half of the push endpoint.
    domain_name: String,

    /// The deployment stage, the other half of the push endpoint.
    stage: String,
}

impl RequestContext {
    /// Creates a request context.
    #[must_use]
    pub fn new(
        connection_id: ConnectionId,
        domain_name: impl Into<String>,
        stage: impl Into<String>,
    ) -> Self {
        Self {
            connection_id,
            domain_name: domain_name.into(),
            stage: stage.into(),
        }
    }

    /// Returns the originating connection.
    #[must_use]
    pub const fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    /// Returns the push endpoint for this frame's transport.
    #[must_use]
    pub fn endpoint(&self) -> TransportEndpoint {
        TransportEndpoint::new(self.domain_name.clone(), self.stage.clone())
    }
}

/// The chat message payload carried by a `"Message"`-typed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    /// The conversation the turn belongs to.
    conversation_id: ConversationId,

    /// The user's text. May be empty if the transport allowed it.
    text: String,

    /// Optional client-supplied sender identifier; the authenticated
    /// principal is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    sender: Option<String>,

    /// Optional client-supplied timestamp; stamped server-side when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    sent_at: Option<DateTime<Utc>>,
}

impl MessagePayload {
    /// Creates a payload with neither sender nor timestamp supplied.
    #[must_use]
    pub fn new(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            text: text.into(),
            sender: None,
            sent_at: None,
        }
    }

    /// Sets the client-supplied sender identifier.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the client-supplied timestamp.
    #[must_use]
    pub const fn with_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// Returns the user's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the client-supplied sender, if any.
    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the client-supplied timestamp, if any.
    #[must_use]
    pub const fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }
}

/// Type-tagged frame payload.
///
/// Only the `"Message"` type is processed; any other tag is acknowledged as
/// a logged no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Payload {
    /// A chat message turn.
    Message(MessagePayload),

    /// Any payload type this core does not handle.
    #[serde(other)]
    Unsupported,
}

/// The envelope body wrapping the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    /// The type-tagged payload.
    data: Payload,
}

impl EventBody {
    /// Wraps a payload.
    #[must_use]
    pub const fn new(data: Payload) -> Self {
        Self { data }
    }

    /// Returns the payload.
    #[must_use]
    pub const fn data(&self) -> &Payload {
        &self.data
    }
}

/// One parsed inbound event.
///
/// # Examples
///
/// ```
/// use switchboard::gateway::domain::InboundEvent;
///
/// let raw = r#"{
///     "identity": { "principal": "cust42" },
///     "requestContext": {
///         "connectionId": "conn1#",
///         "domainName": "chat.example.com",
///         "stage": "prod"
///     },
///     "body": { "data": { "type": "Message", "conversationId": "agentX", "text": "hi" } }
/// }"#;
///
/// let event = InboundEvent::from_json(raw).expect("valid envelope");
/// assert_eq!(event.identity().principal(), "cust42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    /// Identity bound to the connection.
    identity: CallerIdentity,

    /// Transport-level request context.
    request_context: RequestContext,

    /// The envelope body.
    body: EventBody,
}

impl InboundEvent {
    /// Creates an event from its parts.
    #[must_use]
    pub const fn new(
        identity: CallerIdentity,
        request_context: RequestContext,
        body: EventBody,
    ) -> Self {
        Self {
            identity,
            request_context,
            body,
        }
    }

    /// Parses an event from the raw transport frame.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the frame is not a
    /// valid envelope.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Returns the identity bound to the connection.
    #[must_use]
    pub const fn identity(&self) -> &CallerIdentity {
        &self.identity
    }

    /// Returns the transport-level request context.
    #[must_use]
    pub const fn request_context(&self) -> &RequestContext {
        &self.request_context
    }

    /// Returns the envelope body.
    #[must_use]
    pub const fn body(&self) -> &EventBody {
        &self.body
    }
}
