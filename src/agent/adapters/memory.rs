//! In-memory implementations of the agent ports.
//!
//! [`InMemoryBindingRepository`] backs binding lookups with a hash map;
//! [`ScriptedAgentConnector`] plays back scripted reply streams and records
//! every request it receives. Suitable for unit tests only.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use futures::StreamExt;

use crate::agent::{
    domain::{AgentBinding, InvocationRequest},
    ports::{
        binding_repository::{AgentBindingRepository, BindingError, BindingResult},
        connector::{AgentConnector, AgentInvocationError, AgentResult, ReplyChunkStream},
    },
};
use crate::message::domain::ConversationId;

/// Thread-safe in-memory binding repository.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBindingRepository {
    bindings: Arc<RwLock<HashMap<ConversationId, AgentBinding>>>,
}

impl InMemoryBindingRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a conversation to an agent, standing in for the out-of-band
    /// provisioning flow.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::Persistence`] if the lock is poisoned.
    pub fn bind(
        &self,
        conversation_id: ConversationId,
        binding: AgentBinding,
    ) -> BindingResult<()> {
        let mut guard = self
            .bindings
            .write()
            .map_err(|e| BindingError::persistence(std::io::Error::other(e.to_string())))?;

        guard.insert(conversation_id, binding);
        Ok(())
    }
}

#[async_trait]
impl AgentBindingRepository for InMemoryBindingRepository {
    async fn find_by_conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> BindingResult<Option<AgentBinding>> {
        let guard = self
            .bindings
            .read()
            .map_err(|e| BindingError::persistence(std::io::Error::other(e.to_string())))?;

        Ok(guard.get(conversation_id).cloned())
    }
}

/// One scripted agent session outcome.
#[derive(Debug, Clone)]
pub enum SessionScript {
    /// The session streams these chunks and completes.
    Reply(Vec<Vec<u8>>),

    /// The session cannot be opened.
    OpenFailure(AgentInvocationError),

    /// The session streams some chunks, then fails mid-stream.
    ChunkFailure {
        /// Chunks delivered before the failure.
        leading: Vec<Vec<u8>>,
        /// The mid-stream error.
        error: AgentInvocationError,
    },

    /// The session opens but never yields a chunk, for timeout tests.
    Stall,
}

impl SessionScript {
    /// Scripts a reply from UTF-8 text fragments.
    #[must_use]
    pub fn reply(fragments: &[&str]) -> Self {
        Self::Reply(fragments.iter().map(|f| f.as_bytes().to_vec()).collect())
    }
}

#[derive(Debug, Default)]
struct ConnectorState {
    scripts: VecDeque<SessionScript>,
    requests: Vec<InvocationRequest>,
}

/// Scripted agent connector: plays back queued session outcomes and records
/// the requests it receives for assertions.
///
/// When the script queue is empty, sessions complete immediately with zero
/// chunks.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAgentConnector {
    state: Arc<Mutex<ConnectorState>>,
}

impl ScriptedAgentConnector {
    /// Creates a connector with an empty script queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome for the next session.
    pub fn script(&self, script: SessionScript) {
        if let Ok(mut state) = self.state.lock() {
            state.scripts.push_back(script);
        }
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<InvocationRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AgentConnector for ScriptedAgentConnector {
    async fn open_session(&self, request: &InvocationRequest) -> AgentResult<ReplyChunkStream> {
        let script = {
            let mut state = self
                .state
                .lock()
                .map_err(|e| AgentInvocationError::session_open(std::io::Error::other(e.to_string())))?;

            state.requests.push(request.clone());
            state
                .scripts
                .pop_front()
                .unwrap_or(SessionScript::Reply(Vec::new()))
        };

        match script {
            SessionScript::Reply(chunks) => {
                Ok(futures::stream::iter(chunks.into_iter().map(Ok)).boxed())
            }
            SessionScript::OpenFailure(error) => Err(error),
            SessionScript::ChunkFailure { leading, error } => {
                let mut items: Vec<AgentResult<Vec<u8>>> =
                    leading.into_iter().map(Ok).collect();
                items.push(Err(error));
                Ok(futures::stream::iter(items).boxed())
            }
            SessionScript::Stall => Ok(futures::stream::pending().boxed()),
        }
    }
}
