//! Domain types for connection-level delivery.

mod connection;

pub use connection::{ConnectionId, TransportEndpoint};
