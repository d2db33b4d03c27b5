//! Connection identifiers and the push-transport endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for one live duplex transport session.
///
/// Assigned by the transport layer at connect time; this core only reads
/// identifiers and candidates stale ones for pruning during broadcast.
///
/// # Examples
///
/// ```
/// use switchboard::delivery::domain::ConnectionId;
///
/// let id = ConnectionId::new("conn1#");
/// assert_eq!(id.as_str(), "conn1#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates a connection identifier from an opaque string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The transport endpoint messages are pushed through, derived per event
/// from the inbound request context.
///
/// # Examples
///
/// ```
/// use switchboard::delivery::domain::TransportEndpoint;
///
/// let endpoint = TransportEndpoint::new("chat.example.com", "prod");
/// assert_eq!(endpoint.to_string(), "chat.example.com/prod");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportEndpoint {
    domain_name: String,
    stage: String,
}

impl TransportEndpoint {
    /// Creates an endpoint from a domain name and deployment stage.
    #[must_use]
    pub fn new(domain_name: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            stage: stage.into(),
        }
    }

    /// Returns the domain name.
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Returns the deployment stage.
    #[must_use]
    pub fn stage(&self) -> &str {
        &self.stage
    }
}

impl fmt::Display for TransportEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain_name, self.stage)
    }
}
