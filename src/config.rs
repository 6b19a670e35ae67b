//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Expiry in seconds for cached vote/feedback counters.
    ///
    /// A long timeout is fine here because counters are explicitly
    /// refreshed whenever a vote or feedback record changes; expiry is
    /// only a safety net.
    pub cache_timeout_long: u64,
    /// Background counter-cache cleanup interval in seconds
    pub cleanup_interval: u64,
    /// Allow proposal editing even when the call for proposals is closed
    pub proposal_editing_when_cfp_is_closed: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TIMEOUT_LONG` - Counter cache expiry in seconds (default: 86400)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `PROPOSAL_EDITING_WHEN_CFP_IS_CLOSED` - Editing override (default: false)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_timeout_long: env::var("CACHE_TIMEOUT_LONG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            proposal_editing_when_cfp_is_closed: env::var("PROPOSAL_EDITING_WHEN_CFP_IS_CLOSED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_timeout_long: 86_400,
            cleanup_interval: 60,
            proposal_editing_when_cfp_is_closed: false,
        }
    }
}
