//! Construction-time configuration for the gateway.
//!
//! All tunables are passed explicitly at construction; the core reads no
//! ambient environment state.

use std::time::Duration;

/// Configuration value object for the message-orchestration core.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use switchboard::gateway::config::GatewayConfig;
///
/// let config = GatewayConfig::new().with_agent_reply_timeout(Duration::from_secs(30));
/// assert_eq!(config.agent_reply_timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Budget for one agent invocation, from session open to stream
    /// completion. Distinct from any outer request deadline so a slow agent
    /// degrades gracefully.
    agent_reply_timeout: Duration,
}

impl GatewayConfig {
    /// Default agent reply-timeout budget.
    pub const DEFAULT_AGENT_REPLY_TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a configuration with default budgets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            agent_reply_timeout: Self::DEFAULT_AGENT_REPLY_TIMEOUT,
        }
    }

    /// Overrides the agent reply-timeout budget.
    #[must_use]
    pub const fn with_agent_reply_timeout(mut self, timeout: Duration) -> Self {
        self.agent_reply_timeout = timeout;
        self
    }

    /// Returns the agent reply-timeout budget.
    #[must_use]
    pub const fn agent_reply_timeout(&self) -> Duration {
        self.agent_reply_timeout
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}
