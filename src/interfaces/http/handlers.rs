//! Request handlers for the prediction API

use super::error::{ApiError, Result};
use super::state::AppState;
use crate::domain::vehicle::FeatureVector;
use crate::infrastructure::observability::metrics::REJECT_MALFORMED;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AppInfo {
    pub app_name: String,
    pub environment: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub request_count: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub prediction: f64,
}

pub async fn root(State(state): State<Arc<AppState>>) -> Json<AppInfo> {
    Json(AppInfo {
        app_name: state.app_name.clone(),
        environment: state.environment.clone(),
    })
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        request_count: state.service.request_count(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<FeatureVector>, JsonRejection>,
) -> Result<Json<PredictionResponse>> {
    let Json(vector) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "Malformed prediction request");
        state.service.metrics().record_rejection(REJECT_MALFORMED);
        ApiError::from(rejection)
    })?;

    let prediction = state.service.predict(&vector)?;
    Ok(Json(PredictionResponse { prediction }))
}
