//! HTTP client settings and construction

use crate::constants::{HTTP_CLIENT_TIMEOUT_SECS, HTTP_IDLE_TIMEOUT_SECS, HTTP_MAX_IDLE_PER_HOST};
use memsync_domain::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client configuration
///
/// Controls connection pooling, the client-wide timeout and the user agent.
/// Individual batch requests set their own deadline on top of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: HTTP_MAX_IDLE_PER_HOST,
            idle_timeout: Duration::from_secs(HTTP_IDLE_TIMEOUT_SECS),
            timeout: Duration::from_secs(HTTP_CLIENT_TIMEOUT_SECS),
            user_agent: format!("memsync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Override the user agent
    #[must_use]
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Build a `reqwest::Client` from the configuration
pub fn build_http_client(config: &HttpClientConfig) -> Result<Client> {
    Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(config.idle_timeout)
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::config_with_source("Failed to build HTTP client", e))
}
