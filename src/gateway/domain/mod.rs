//! Domain types for the inbound protocol boundary.

mod envelope;
mod response;

pub use envelope::{CallerIdentity, EventBody, InboundEvent, MessagePayload, Payload, RequestContext};
pub use response::ProtocolResponse;
