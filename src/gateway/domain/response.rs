//! The protocol acknowledgement returned to the transport layer.

/// Result of handling one inbound event.
///
/// A success acknowledgement is returned on any reachable completion,
/// including best-effort paths where the agent turn could not be persisted.
/// Error responses carry diagnostic text for the transport layer's logs.
/// The agent's reply itself is never returned through this channel; it is
/// delivered exclusively by broadcast.
///
/// # Examples
///
/// ```
/// use switchboard::gateway::domain::ProtocolResponse;
///
/// let ack = ProtocolResponse::ok();
/// assert!(ack.is_success());
/// assert_eq!(ack.status_code(), 200);
///
/// let error = ProtocolResponse::server_error("user turn could not be persisted");
/// assert_eq!(error.status_code(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolResponse {
    status_code: u16,
    body: String,
}

impl ProtocolResponse {
    /// Creates a success acknowledgement with an empty body.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status_code: 200,
            body: String::new(),
        }
    }

    /// Creates a not-found response for an unroutable conversation.
    #[must_use]
    pub fn not_found(diagnostic: impl Into<String>) -> Self {
        Self {
            status_code: 404,
            body: diagnostic.into(),
        }
    }

    /// Creates a server-error response with diagnostic text.
    #[must_use]
    pub fn server_error(diagnostic: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: diagnostic.into(),
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for success acknowledgements.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
