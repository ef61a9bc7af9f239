use crate::config::ClientEnvConfig;
use crate::domain::vehicle::FeatureVector;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures a prediction call can surface to the form.
/// Each variant renders as its own user-facing message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(
        "Could not connect to the prediction service. Make sure the backend is running at {url}"
    )]
    Connection { url: String },

    #[error("The prediction service at {url} did not answer within {} seconds", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from server: {body}")]
    MissingPrediction { body: String },

    #[error("Request failed: {reason}")]
    Transport { reason: String },
}

/// HTTP client for the prediction service
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PredictionClient {
    pub fn new(config: &ClientEnvConfig) -> Result<Self, ClientError> {
        let http = HttpClientFactory::create_client(config.request_timeout).map_err(|e| {
            ClientError::Transport {
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            http,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts one vehicle to `/predict` and returns the predicted price.
    /// Never retries.
    pub async fn predict(&self, vector: &FeatureVector) -> Result<f64, ClientError> {
        let url = format!("{}/predict", self.base_url);
        debug!(url = %url, "Requesting prediction");

        let response = self
            .http
            .post(&url)
            .json(vector)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), body = %body, "Prediction request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_prediction(&body).ok_or(ClientError::MissingPrediction { body })
    }

    /// Checks that the service answers `/health` with status OK
    pub async fn health(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    fn classify(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout {
                url: self.base_url.clone(),
                timeout: self.timeout,
            }
        } else if e.is_connect() {
            ClientError::Connection {
                url: self.base_url.clone(),
            }
        } else {
            ClientError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

/// Reads the numeric `prediction` field of a response body
fn extract_prediction(body: &str) -> Option<f64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("prediction")?
        .as_f64()
}
