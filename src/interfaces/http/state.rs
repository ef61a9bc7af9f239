//! Application state shared across handlers

use crate::application::prediction_service::PredictionService;
use chrono::{DateTime, Utc};

pub struct AppState {
    pub app_name: String,
    pub environment: String,
    pub service: PredictionService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        app_name: impl Into<String>,
        environment: impl Into<String>,
        service: PredictionService,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            environment: environment.into(),
            service,
            started_at: Utc::now(),
        }
    }
}
