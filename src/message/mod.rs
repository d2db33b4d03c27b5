//! The immutable chat message record and its persistence boundary.
//!
//! A message is one turn within a conversation, authored either by a user or
//! by the conversation's bound agent. Records are created exactly once by the
//! orchestrator, never mutated, and never deleted by this core. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The message-store port in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
