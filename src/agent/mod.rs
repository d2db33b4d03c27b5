//! Agent routing and streamed invocation.
//!
//! A conversation is bound once, out of band, to a specific agent identity.
//! This module resolves that binding, derives the session-correlation key
//! that keeps a caller's successive turns on one agent-side session, and
//! drives the remote agent's incremental reply stream into a complete reply.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
