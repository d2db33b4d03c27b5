//! The author of a message turn.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

/// The string that identifies the agent on the wire.
///
/// Reserved: a user identifier must never equal this value.
pub const AGENT_SENDER: &str = "agent";

/// The author of a message: either an identified user or the conversation's
/// bound agent.
///
/// On the wire a sender is a bare string, either the user identifier or the
/// reserved literal `"agent"`, so the serde implementations are written by
/// hand rather than derived.
///
/// # Examples
///
/// ```
/// use switchboard::message::domain::Sender;
///
/// let user = Sender::user("cust42");
/// assert_eq!(user.to_string(), "cust42");
/// assert!(!user.is_agent());
/// assert!(Sender::Agent.is_agent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// An identified end user.
    User(String),
    /// The agent bound to the conversation.
    Agent,
}

impl Sender {
    /// Creates a user sender from an identifier.
    #[must_use]
    pub fn user(id: impl Into<String>) -> Self {
        Self::User(id.into())
    }

    /// Returns `true` when the sender is the agent.
    #[must_use]
    pub const fn is_agent(&self) -> bool {
        matches!(self, Self::Agent)
    }

    /// Returns the wire representation of the sender.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User(id) => id,
            Self::Agent => AGENT_SENDER,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Sender {
    fn from(value: &str) -> Self {
        if value == AGENT_SENDER {
            Self::Agent
        } else {
            Self::User(value.to_owned())
        }
    }
}

impl Serialize for Sender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct SenderVisitor;

impl Visitor<'_> for SenderVisitor {
    type Value = Sender;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sender string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Sender::from(value))
    }
}

impl<'de> Deserialize<'de> for Sender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(SenderVisitor)
    }
}
