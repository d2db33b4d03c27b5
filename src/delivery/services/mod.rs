//! Application services for message delivery.

mod broadcaster;

pub use broadcaster::{BroadcastOutcome, Broadcaster};
