//! Message delivery to live duplex connections.
//!
//! A conversation's participants hold persistent duplex connections owned by
//! the transport layer. This module reads the registry of live connections,
//! pushes finalised message records to each of them, and opportunistically
//! prunes connections the transport reports as gone. It never owns the
//! connect/disconnect lifecycle. The module follows hexagonal architecture:
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
