//! # API Configuration
//!
//! Base URL and timeouts for backend access.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit values passed by the caller
//! 2. Environment variables (`KARYANA_*`)
//! 3. Development defaults (local backend)

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Default backend for development.
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the backend clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to,
    /// e.g. "https://karyana.example.com/api".
    base_url: String,

    /// Per-request timeout (connect + transfer).
    pub request_timeout: Duration,

    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl ApiConfig {
    /// Creates a config with default timeouts for the given base URL.
    ///
    /// A trailing slash on the base is dropped so endpoint paths can always
    /// start with one.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // Parse purely for validation; paths are joined textually because
        // the base itself carries a path segment ("/api").
        Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        Ok(ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Creates a config from environment variables or provided values.
    ///
    /// `KARYANA_API_URL` sets the base URL and
    /// `KARYANA_HTTP_TIMEOUT_SECS` the request timeout.
    pub fn from_env_or(base_url: Option<String>) -> ApiResult<Self> {
        let base = base_url
            .or_else(|| std::env::var("KARYANA_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(&base)?;

        if let Some(secs) = std::env::var("KARYANA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }

    /// Absolute URL for an endpoint path (which must start with '/').
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the process-wide HTTP client with the configured timeouts.
    ///
    /// Build it once and hand clones to the API clients; clones share one
    /// connection pool.
    pub fn http_client(&self) -> ApiResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("could not build HTTP client: {e}")))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
