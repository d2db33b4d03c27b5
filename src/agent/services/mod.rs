//! Application services for agent invocation.

mod invoker;

pub use invoker::AgentInvoker;
