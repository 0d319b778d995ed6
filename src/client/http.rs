//! HTTP client abstraction for wallet bridge requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::domain::GatewayError;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for the cheap session probe, in seconds.
pub const STATUS_TIMEOUT_SECS: u64 = 3;

/// Connection pool idle timeout, in seconds.
const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Timeout for wallet and canister calls
    pub timeout: Duration,
    /// Timeout for the session probe
    pub status_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            status_timeout: Duration::from_secs(STATUS_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom call timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` if the TLS backend cannot be
    /// initialised.
    pub fn with_config(config: HttpConfig) -> Result<Self, GatewayError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .build()
            .map_err(|e| GatewayError::Unavailable(format!("HTTP client init failed: {e}")))?;

        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers and the probe timeout
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.status_timeout)
    }

    /// Build a POST request with standard headers and the call timeout
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}

// ============================================================================
// Tests
// ============================================================================
