//! Port contracts for connection lookup and point-to-point delivery.

pub mod registry;
pub mod transport;

pub use registry::{ConnectionRegistry, RegistryError, RegistryResult};
pub use transport::{ConnectionTransport, DeliveryError, DeliveryResult};
