//! Service endpoint configuration

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Where the webhook service lives and how to talk to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Number of items requested from `/status/activity`
    pub activity_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 10,
            activity_limit: 5,
        }
    }
}

impl ApiConfig {
    /// The base URL must be absolute http(s); timeout and limit non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::invalid(
                "api.base_url",
                "base URL cannot be empty",
            ));
        }
        let parsed = url::Url::parse(self.base_url.trim())
            .map_err(|e| ConfigError::invalid("api.base_url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_seconds",
                "timeout must be non-zero",
            ));
        }
        if self.activity_limit == 0 {
            return Err(ConfigError::invalid(
                "api.activity_limit",
                "limit must be non-zero",
            ));
        }

        Ok(())
    }
}
