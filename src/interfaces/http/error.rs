//! Error types for the HTTP API

use crate::application::prediction_service::PredictionError;
use crate::domain::errors::{ScoringError, ValidationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body could not be read as a feature vector
    #[error("Invalid request: {message}")]
    Malformed { status: StatusCode, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Invalid(e) => ApiError::Validation(e),
            PredictionError::Scoring(e) => ApiError::Scoring(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed { status, .. } => *status,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Malformed { message, .. } => message.clone(),
            ApiError::Validation(e) => e.to_string(),
            ApiError::Scoring(e) => format!("Prediction failed: {}", e),
        };

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::Validation(ValidationError::EmptyField { field: "brand" });
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let scoring = ApiError::Scoring(ScoringError::EmptyOutput);
        assert_eq!(scoring.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let malformed = ApiError::Malformed {
            status: StatusCode::BAD_REQUEST,
            message: "bad json".to_string(),
        };
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_prediction_error_conversion() {
        let err: ApiError = PredictionError::Scoring(ScoringError::EmptyOutput).into();
        assert!(matches!(err, ApiError::Scoring(_)));
    }
}
