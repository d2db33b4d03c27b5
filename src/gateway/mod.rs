//! The inbound protocol boundary and the message orchestrator.
//!
//! The gateway receives one parsed event per inbound transport frame and
//! drives the full pipeline: persist the user turn, broadcast it, invoke
//! the bound agent, persist and broadcast the reply, and produce the
//! protocol acknowledgement. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Construction-time configuration in [`config`]
//! - Orchestration services in [`services`]

pub mod config;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
