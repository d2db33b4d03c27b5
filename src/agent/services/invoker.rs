//! Streaming agent invoker: turns a chunk stream into a complete reply.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::debug;

use crate::agent::{
    domain::{AgentBinding, InvocationRequest, SessionKey},
    ports::connector::{AgentConnector, AgentInvocationError, AgentResult},
};

/// Service that invokes the remote agent and reassembles its streamed reply.
///
/// The invocation is the one potentially long-latency operation in the
/// message pipeline, so the whole open-and-consume call is bounded by a
/// caller-supplied reply timeout, separate from any outer request deadline.
/// Dropping the returned future drops the chunk stream, aborting the remote
/// read rather than merely ceasing to poll it.
///
/// # Example
///
/// ```ignore
/// use switchboard::agent::services::AgentInvoker;
///
/// let invoker = AgentInvoker::new(connector, config.agent_reply_timeout);
/// let reply = invoker.invoke(&binding, &session, "What is my claim status?").await?;
/// ```
#[derive(Clone)]
pub struct AgentInvoker<C>
where
    C: AgentConnector,
{
    connector: Arc<C>,
    reply_timeout: Duration,
}

impl<C> AgentInvoker<C>
where
    C: AgentConnector,
{
    /// Creates an invoker over a connector with a reply-timeout budget.
    pub const fn new(connector: Arc<C>, reply_timeout: Duration) -> Self {
        Self {
            connector,
            reply_timeout,
        }
    }

    /// Returns the configured reply-timeout budget.
    #[must_use]
    pub const fn reply_timeout(&self) -> Duration {
        self.reply_timeout
    }

    /// Invokes the agent and returns the fully reassembled reply text.
    ///
    /// Chunks are concatenated in arrival order and decoded as UTF-8 exactly
    /// once, after the stream completes; chunk boundaries may split
    /// multi-byte sequences, so decoding mid-stream is never attempted. A
    /// stream that completes without yielding any chunk produces an empty
    /// string, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AgentInvocationError`] when the session cannot be opened,
    /// the stream fails mid-reply, the concatenated bytes are not valid
    /// UTF-8, or the reply exceeds the timeout budget.
    pub async fn invoke(
        &self,
        binding: &AgentBinding,
        session: &SessionKey,
        input_text: &str,
    ) -> AgentResult<String> {
        let request = InvocationRequest::new(binding, session, input_text);

        tokio::time::timeout(self.reply_timeout, self.collect_reply(&request))
            .await
            .map_err(|_| AgentInvocationError::Timeout(self.reply_timeout))?
    }

    async fn collect_reply(&self, request: &InvocationRequest) -> AgentResult<String> {
        let mut stream = self.connector.open_session(request).await?;

        let mut buffer = Vec::new();
        let mut chunk_count = 0_usize;
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
            chunk_count += 1;
        }

        debug!(
            agent_id = request.agent_id(),
            chunks = chunk_count,
            bytes = buffer.len(),
            "agent reply stream completed"
        );

        Ok(String::from_utf8(buffer)?)
    }
}
