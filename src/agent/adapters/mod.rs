//! Adapters for agent binding lookup and invocation.
//!
//! The production binding store and agent service are external systems
//! integrated at the port boundary; this crate ships the in-memory fakes
//! used by unit and behavioural tests.

pub mod memory;

pub use memory::{InMemoryBindingRepository, ScriptedAgentConnector, SessionScript};
