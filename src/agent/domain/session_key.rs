//! Session-correlation key derivation.
//!
//! The remote agent keeps conversational state per session. The key must be
//! deterministic so that a caller's successive turns over one connection
//! reuse the same agent-side session, while distinct callers or connections
//! never collide.

use crate::delivery::domain::ConnectionId;
use sha2::{Digest, Sha256};
use std::fmt;

/// Byte separating the connection and principal inputs so neither can be
/// crafted to collide with the other's suffix/prefix.
const KEY_SEPARATOR: u8 = 0x1f;

/// Deterministic session-correlation key for the remote agent service.
///
/// Derived from the originating connection and the authenticated principal;
/// never persisted. The connection identifier is first normalised by
/// dropping its trailing transport marker character, then the key is the
/// hex-encoded SHA-256 of the normalised identifier and the principal.
/// Hashing keeps the key fixed-length and free of characters the agent
/// service rejects in session identifiers.
///
/// # Examples
///
/// ```
/// use switchboard::agent::domain::SessionKey;
/// use switchboard::delivery::domain::ConnectionId;
///
/// let a = SessionKey::derive(&ConnectionId::new("conn1#"), "cust42");
/// let b = SessionKey::derive(&ConnectionId::new("conn1#"), "cust42");
/// let other = SessionKey::derive(&ConnectionId::new("conn1#"), "cust99");
///
/// assert_eq!(a, b);
/// assert_ne!(a, other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Derives the key for a connection and authenticated principal.
    #[must_use]
    pub fn derive(connection_id: &ConnectionId, principal: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(normalise(connection_id.as_str()).as_bytes());
        hasher.update([KEY_SEPARATOR]);
        hasher.update(principal.as_bytes());

        let digest = hasher.finalize();
        let mut key = String::with_capacity(digest.len() * 2);
        for byte in digest {
            key.push_str(&format!("{byte:02x}"));
        }

        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops the trailing transport marker character the duplex transport
/// appends to connection identifiers, so reconnect-stable prefixes map to
/// the same session.
fn normalise(connection_id: &str) -> &str {
    let mut chars = connection_id.chars();
    chars.next_back();
    chars.as_str()
}
