//! Domain types for agent routing and invocation.

mod binding;
mod error;
mod invocation;
mod session_key;

pub use binding::AgentBinding;
pub use error::AgentDomainError;
pub use invocation::InvocationRequest;
pub use session_key::SessionKey;
