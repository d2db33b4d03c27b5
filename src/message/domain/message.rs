//! The immutable message record: one turn within a conversation.

use super::{ConversationId, MessageId, Sender};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single turn within a conversation, authored by a user or by the agent.
///
/// Records are created by the orchestrator at persistence time and are
/// immutable afterwards. The serde representation is the canonical wire
/// shape: the store record and the broadcast payload are field-identical
/// camelCase JSON.
///
/// Ordering note: `sent_at` is not guaranteed monotonic across distributed
/// writers. Display ordering is a store concern: sort by timestamp, ties
/// broken by insertion order.
///
/// # Examples
///
/// ```
/// use switchboard::message::domain::{ConversationId, Message, Sender};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let turn = Message::user_turn(
///     ConversationId::new("claims-desk"),
///     Sender::user("cust42"),
///     "What is my claim status?",
///     None,
///     &clock,
/// );
/// assert!(!turn.sender().is_agent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-generated unique identifier.
    message_id: MessageId,

    /// The conversation this turn belongs to.
    conversation_id: ConversationId,

    /// Who authored the turn.
    sender: Sender,

    /// The UTF-8 payload. May be empty: the transport may allow empty user
    /// turns, and an agent reply stream that completes without chunks yields
    /// an empty agent turn.
    text: String,

    /// When the turn was sent.
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Creates a user turn, generating a fresh message identifier.
    ///
    /// `sent_at` falls back to the injected clock when the transport did not
    /// supply a timestamp.
    #[must_use]
    pub fn user_turn(
        conversation_id: ConversationId,
        sender: Sender,
        text: impl Into<String>,
        sent_at: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            message_id: MessageId::new(),
            conversation_id,
            sender,
            text: text.into(),
            sent_at: sent_at.unwrap_or_else(|| clock.utc()),
        }
    }

    /// Creates an agent turn, generating a fresh message identifier and
    /// stamping the current time.
    #[must_use]
    pub fn agent_turn(
        conversation_id: ConversationId,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            message_id: MessageId::new(),
            conversation_id,
            sender: Sender::Agent,
            text: text.into(),
            sent_at: clock.utc(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn message_id(&self) -> MessageId {
        self.message_id
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// Returns the sender.
    #[must_use]
    pub const fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sent timestamp.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Serialises the record to its canonical wire JSON.
    ///
    /// The same shape is written to the store and pushed to connections, so
    /// a message round-trips identically on both paths.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails; with this
    /// fixed field set that only occurs on formatter-level failures.
    pub fn to_wire_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
