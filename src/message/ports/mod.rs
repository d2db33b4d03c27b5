//! Port contracts for message persistence.

pub mod store;

pub use store::{MessageStore, StoreError, StoreResult};
