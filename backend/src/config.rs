//! Host settings, read from `DASHBOARD_*` environment variables.
//!
//! | variable                 | default                 |
//! |--------------------------|-------------------------|
//! | `DASHBOARD_HOST`         | `127.0.0.1`             |
//! | `DASHBOARD_PORT`         | `8080`                  |
//! | `DASHBOARD_API_URL`      | `ClientConfig` default  |
//! | `DASHBOARD_OPEN_BROWSER` | `true`                  |

use common::config::ClientConfig;
use common::error::ConfigError;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum HostConfigError {
    #[error("DASHBOARD_PORT must be a port number (got \"{0}\")")]
    Port(String),
    #[error("DASHBOARD_OPEN_BROWSER must be true or false (got \"{0}\")")]
    OpenBrowser(String),
    #[error("DASHBOARD_API_URL: {0}")]
    ApiUrl(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Served to the frontend at `common::config::CONFIG_PATH`.
    pub client: ClientConfig,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DASHBOARD_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("DASHBOARD_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| HostConfigError::Port(raw))?,
            None => DEFAULT_PORT,
        };

        let client = match lookup("DASHBOARD_API_URL") {
            Some(raw) => ClientConfig::new(&raw)?,
            None => ClientConfig::default(),
        };

        let open_browser = match lookup("DASHBOARD_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).ok_or(HostConfigError::OpenBrowser(raw))?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            client,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.client, ClientConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = HostConfig::from_lookup(lookup(&[
            ("DASHBOARD_HOST", "0.0.0.0"),
            ("DASHBOARD_PORT", " 9000 "),
            ("DASHBOARD_API_URL", "https://records.internal/"),
            ("DASHBOARD_OPEN_BROWSER", "off"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.client.api_url, "https://records.internal");
        assert!(!config.open_browser);
    }

    #[test]
    fn reports_bad_values() {
        let err = HostConfig::from_lookup(lookup(&[("DASHBOARD_PORT", "80000")])).unwrap_err();
        assert!(matches!(err, HostConfigError::Port(ref p) if p == "80000"));

        let err = HostConfig::from_lookup(lookup(&[("DASHBOARD_OPEN_BROWSER", "maybe")])).unwrap_err();
        assert!(matches!(err, HostConfigError::OpenBrowser(_)));

        let err = HostConfig::from_lookup(lookup(&[("DASHBOARD_API_URL", "records:1001")])).unwrap_err();
        assert!(matches!(err, HostConfigError::ApiUrl(ConfigError::UnsupportedScheme(_))));
    }
}
