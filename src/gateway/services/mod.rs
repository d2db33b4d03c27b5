//! Application services for the gateway.

mod orchestrator;

pub use orchestrator::MessageOrchestrator;
