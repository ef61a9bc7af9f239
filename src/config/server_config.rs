//! Prediction service configuration parsed from environment variables.

use crate::domain::vehicle::CategoryValidation;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_APP_NAME: &str = "Car Prices Predictor";

/// Prediction service environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub app_name: String,
    pub environment: String,
    pub model_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub category_validation: CategoryValidation,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: "production".to_string(),
            model_path: PathBuf::from("model.json"),
            host: "0.0.0.0".to_string(),
            port: 5000,
            category_validation: CategoryValidation::Strict,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid API_PORT: {}", raw))?,
            Err(_) => defaults.port,
        };

        let category_validation = match env::var("CATEGORY_VALIDATION") {
            Ok(raw) => CategoryValidation::from_str(&raw)?,
            Err(_) => defaults.category_validation,
        };

        Ok(Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port,
            category_validation,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
