//! The wire request sent to the remote agent service.

use super::{AgentBinding, SessionKey};
use serde::Serialize;

/// A single-shot invocation request against the remote agent service.
///
/// `end_session` is always `false`: the agent-side session persists across
/// calls keyed by the session-correlation key, and this core never manages
/// session teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    /// The remote agent identifier.
    agent_id: String,

    /// The agent version alias to route to.
    agent_alias_id: String,

    /// The session-correlation key for this caller.
    session_id: String,

    /// Whether the agent-side session should be closed after this call.
    end_session: bool,

    /// The user's text for this turn.
    input_text: String,
}

impl InvocationRequest {
    /// Builds the request for a binding, session key, and user text.
    #[must_use]
    pub fn new(binding: &AgentBinding, session: &SessionKey, input_text: impl Into<String>) -> Self {
        Self {
            agent_id: binding.agent_id().to_owned(),
            agent_alias_id: binding.agent_alias_id().to_owned(),
            session_id: session.as_str().to_owned(),
            end_session: false,
            input_text: input_text.into(),
        }
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

    /// Returns the session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns `true` when the agent-side session ends after this call.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        self.end_session
    }

    /// Returns the user's input text.
    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }
}
