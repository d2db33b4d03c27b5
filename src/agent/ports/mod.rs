//! Port contracts for agent binding lookup and streamed invocation.

pub mod binding_repository;
pub mod connector;

pub use binding_repository::{AgentBindingRepository, BindingError, BindingResult};
pub use connector::{AgentConnector, AgentInvocationError, AgentResult, ReplyChunkStream};
