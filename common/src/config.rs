//! Client configuration: where the remote records service lives.
//!
//! The frontend starts from [`ClientConfig::default`] (compile-time
//! `DASHBOARD_API_URL`, else [`DEFAULT_API_URL`]) and replaces it with the
//! document served by the host at [`CONFIG_PATH`] when that is reachable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::requests::{CALLS_PATH, USERS_PATH};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:1001";

/// Path of the runtime configuration document served next to the bundle.
pub const CONFIG_PATH: &str = "/dashboard-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let raw = option_env!("DASHBOARD_API_URL").unwrap_or(DEFAULT_API_URL);
        Self::new(raw).unwrap_or_else(|_| Self {
            api_url: DEFAULT_API_URL.to_string(),
        })
    }
}

impl ClientConfig {
    /// Validates and normalises an API base URL (trailing slashes removed).
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        let lower = trimmed.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    /// Re-validates a configuration received over the wire.
    pub fn validated(self) -> Result<Self, ConfigError> {
        Self::new(&self.api_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.api_url, USERS_PATH)
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.api_url, USERS_PATH, id)
    }

    pub fn calls_url(&self) -> String {
        format!("{}{}", self.api_url, CALLS_PATH)
    }
}
