//! Central module for application-wide configuration settings.
//!
//! This module holds the runtime parameters of the gateway: where to listen,
//! where the backend API lives, cookie hardening, and the chat history page
//! size every history fetch uses.

use std::net::SocketAddr;
use std::time::Duration;

/// Runtime configuration, assembled from CLI flags and environment variables
/// in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the gateway listens on.
    pub listen: SocketAddr,
    /// Base URL of the backend API, without a trailing slash.
    pub api_url: String,
    /// Marks the session cookie `Secure` (TLS-only deployments).
    pub secure_cookies: bool,
    /// Timeout applied to every backend call.
    pub upstream_timeout: Duration,
    /// Number of messages fetched per chat history page. The backend caps
    /// this at 20 regardless of what is requested.
    pub history_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            api_url: String::new(),
            secure_cookies: false,
            upstream_timeout: Duration::from_secs(10),
            history_page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_expectations() {
        let config = AppConfig::default();
        assert_eq!(config.listen.port(), 3000);
        assert_eq!(config.history_page_size, 20);
        assert!(!config.secure_cookies);
    }
}
