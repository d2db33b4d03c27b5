//! Port for the remote agent's streaming invocation boundary.
//!
//! The remote service answers a request with an incremental sequence of
//! binary chunks terminated by stream completion. The port exposes that raw
//! stream; reassembly into a complete reply belongs to the
//! [`AgentInvoker`] service.
//!
//! [`AgentInvoker`]: crate::agent::services::AgentInvoker

use crate::agent::domain::InvocationRequest;
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for agent invocation operations.
pub type AgentResult<T> = Result<T, AgentInvocationError>;

/// The incremental reply: binary chunks in arrival order, terminated by
/// stream completion.
pub type ReplyChunkStream = BoxStream<'static, AgentResult<Vec<u8>>>;

/// Streaming session contract against the remote agent service.
#[async_trait]
pub trait AgentConnector: Send + Sync {
    /// Opens a single-shot session and sends the request.
    ///
    /// Dropping the returned stream aborts the remote read, which is how
    /// cancellation propagates when the surrounding task is cancelled or
    /// times out.
    ///
    /// # Errors
    ///
    /// Returns [`AgentInvocationError::SessionOpen`] when the session cannot
    /// be established.
    async fn open_session(&self, request: &InvocationRequest) -> AgentResult<ReplyChunkStream>;
}

/// Errors raised while invoking the remote agent.
#[derive(Debug, Clone, Error)]
pub enum AgentInvocationError {
    /// The session could not be opened.
    #[error("agent session could not be opened: {0}")]
    SessionOpen(Arc<dyn std::error::Error + Send + Sync>),

    /// The reply stream failed before completing.
    #[error("agent reply stream failed: {0}")]
    Stream(Arc<dyn std::error::Error + Send + Sync>),

    /// The fully concatenated reply was not valid UTF-8.
    #[error("agent reply was not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The reply did not complete within the configured budget.
    #[error("agent reply timed out after {0:?}")]
    Timeout(Duration),
}

impl AgentInvocationError {
    /// Wraps a session-open failure.
    pub fn session_open(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SessionOpen(Arc::new(err))
    }

    /// Wraps a mid-stream failure.
    pub fn stream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Stream(Arc::new(err))
    }
}
