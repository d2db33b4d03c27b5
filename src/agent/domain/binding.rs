//! The agent binding: which agent identity serves a conversation.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};

/// The immutable mapping from a conversation to the agent that serves it.
///
/// Bindings are created by an out-of-band provisioning flow and looked up,
/// never created, by this core. Once first assigned a binding never changes
/// for the conversation's lifetime.
///
/// # Examples
///
/// ```
/// use switchboard::agent::domain::AgentBinding;
///
/// let binding = AgentBinding::new("AGT12345", "ALIAS01").expect("valid binding");
/// assert_eq!(binding.agent_id(), "AGT12345");
/// assert_eq!(binding.agent_alias_id(), "ALIAS01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBinding {
    /// The remote agent identifier.
    agent_id: String,

    /// The agent version alias to route to.
    agent_alias_id: String,
}

impl AgentBinding {
    /// Creates a binding from agent and alias identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] or
    /// [`AgentDomainError::EmptyAgentAliasId`] when either identifier is
    /// empty after trimming.
    pub fn new(
        agent_id: impl Into<String>,
        agent_alias_id: impl Into<String>,
    ) -> Result<Self, AgentDomainError> {
        let agent_id = agent_id.into();
        let agent_alias_id = agent_alias_id.into();

        if agent_id.trim().is_empty() {
            return Err(AgentDomainError::EmptyAgentId);
        }
        if agent_alias_id.trim().is_empty() {
            return Err(AgentDomainError::EmptyAgentAliasId);
        }

        Ok(Self {
            agent_id,
            agent_alias_id,
        })
    }

    /// Returns the agent identifier.
    #[must_use]
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Returns the agent alias identifier.
    #[must_use]
    pub fn agent_alias_id(&self) -> &str {
        &self.agent_alias_id
    }
}
