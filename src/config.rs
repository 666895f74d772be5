//! Client configuration
//!
//! One `ClientConfig` is built per process and handed to [`ApiClient`]
//! explicitly. Every field has a default, so an empty JSON object is a
//! valid configuration:
//!
//! ```json
//! {"base_url": "https://dog.ceo/api", "timeout_seconds": 10}
//! ```
//!
//! [`ApiClient`]: crate::client::ApiClient

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Marker header attached to every outgoing request
pub const REST_MARKER_HEADER: (&str, &str) = ("isREST", "true");

/// Shortest default timeout; anything lower is raised to this
pub const MIN_TIMEOUT_SECONDS: u64 = 1;

/// Process-wide client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default timeout for requests that don't declare their own
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent sent by the HTTP transport
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers attached to every request, before per-request headers
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            headers: default_headers(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("breedview/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_headers() -> BTreeMap<String, String> {
    let (name, value) = REST_MARKER_HEADER;
    BTreeMap::from([(name.to_string(), value.to_string())])
}

impl ClientConfig {
    /// Parse configuration from a JSON document, filling in defaults
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: ClientConfig =
            serde_json::from_str(content).context("Failed to parse client config JSON")?;
        config.normalize();
        Ok(config)
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    /// Replace the default timeout. Fractions of a second round up.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.normalize();
        self
    }

    /// Default request timeout as a `Duration`, never below the minimum
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(MIN_TIMEOUT_SECONDS))
    }

    // The marker header is fixed, so a config that dropped it gets it back.
    fn normalize(&mut self) {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        let (name, value) = REST_MARKER_HEADER;
        self.headers.insert(name.to_string(), value.to_string());

        if self.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            self.timeout_seconds = MIN_TIMEOUT_SECONDS;
        }
    }
}
