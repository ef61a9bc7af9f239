//! HTTP API for the prediction service.
//!
//! Exposes `GET /`, `GET /health`, `GET /stats` and `POST /predict`.

mod error;
mod handlers;
mod router;
mod state;

pub use error::ApiError;
pub use handlers::{AppInfo, HealthResponse, PredictionResponse, StatsResponse};
pub use router::create_router;
pub use state::AppState;

use crate::application::prediction_service::PredictionService;
use crate::config::ServerEnvConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Serve the API until ctrl+c
pub async fn run_server(config: &ServerEnvConfig, service: PredictionService) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(
        config.app_name.clone(),
        config.environment.clone(),
        service,
    ));
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    info!(
        app_name = %config.app_name,
        environment = %config.environment,
        address = %addr,
        model = %state.service.model_name(),
        model_version = %state.service.model_version(),
        validation = ?state.service.validation(),
        started_at = %state.started_at.to_rfc3339(),
        "Prediction service listening"
    );

    let shutdown_state = Arc::clone(&state);
    let shutdown_signal = async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        let uptime = chrono::Utc::now().signed_duration_since(shutdown_state.started_at);
        info!(
            uptime_secs = uptime.num_seconds(),
            predictions_served = shutdown_state.service.request_count(),
            "Shutdown signal received, stopping server gracefully"
        );
        debug!(metrics = %shutdown_state.service.metrics().render(), "Final counters");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}
