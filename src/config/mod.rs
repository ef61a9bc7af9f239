//! Configuration module for carprice.
//!
//! Configuration is read once from environment variables (a `.env` file is
//! honoured by the binaries) and split by component: the prediction service
//! and the form client.

mod client_config;
mod server_config;

pub use client_config::ClientEnvConfig;
pub use server_config::{DEFAULT_APP_NAME, ServerEnvConfig};

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub client: ClientEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            client: ClientEnvConfig::from_env().context("Failed to load client config")?,
        })
    }
}
