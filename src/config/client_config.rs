//! Form client configuration parsed from environment variables.

use super::server_config::DEFAULT_APP_NAME;
use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;
use url::Url;

/// Form client environment configuration
#[derive(Debug, Clone)]
pub struct ClientEnvConfig {
    pub app_name: String,
    pub backend_url: String,
    /// Upper bound on one prediction round-trip
    pub request_timeout: Duration,
}

impl Default for ClientEnvConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            backend_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let backend_url = env::var("BACKEND_URL").unwrap_or(defaults.backend_url);
        Url::parse(&backend_url).with_context(|| format!("Invalid BACKEND_URL: {}", backend_url))?;

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS: {}", raw))?;
                if secs == 0 {
                    bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
                }
                Duration::from_secs(secs)
            }
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            backend_url,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientEnvConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
