//! Switchboard: the message-orchestration core of a real-time chat front end.
//!
//! Switchboard accepts an inbound chat event from a persistent duplex
//! connection, persists the user's turn, routes the conversation to its bound
//! agent, reassembles the agent's streamed reply, persists it, and fans both
//! turns out to every live connection on the conversation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory fakes here;
//!   the registry, store, transport, and agent service are owned by external
//!   systems and integrated at the port boundary)
//! - **Services**: Orchestration logic wired together by constructor
//!   injection
//!
//! # Modules
//!
//! - [`message`]: The immutable message record and its persistence port
//! - [`agent`]: Agent bindings, session correlation, and streamed invocation
//! - [`delivery`]: Connection registry, push transport, and broadcast fan-out
//! - [`gateway`]: The inbound event envelope and the message orchestrator

pub mod agent;
pub mod delivery;
pub mod gateway;
pub mod message;
