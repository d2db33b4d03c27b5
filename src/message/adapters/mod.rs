//! Persistence adapters for the message module.
//!
//! Provides concrete implementations of the [`MessageStore`] port. The
//! production store is an external key-value service integrated at the port
//! boundary; this crate ships the in-memory adapter used by unit and
//! behavioural tests.
//!
//! [`MessageStore`]: crate::message::ports::store::MessageStore

pub mod memory;

pub use memory::InMemoryMessageStore;
