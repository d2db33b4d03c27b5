//! Adapters for connection lookup and delivery.
//!
//! The production registry and push transport are external systems
//! integrated at the port boundary; this crate ships the in-memory fakes
//! used by unit and behavioural tests.

pub mod memory;

pub use memory::{InMemoryConnectionRegistry, RecordingTransport};
