//! Car price prediction service.
//!
//! Loads the trained model once and serves it over HTTP.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=model.json cargo run --bin server -- --port 8000
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact to load (default: model.json)
//! - `API_HOST` / `API_PORT` - Listen address (default: 0.0.0.0:5000)
//! - `CATEGORY_VALIDATION` - `strict` or `passthrough` (default: strict)

use anyhow::{Context, Result};
use carprice::application::ml::SmartCorePredictor;
use carprice::application::prediction_service::PredictionService;
use carprice::config::Config;
use carprice::infrastructure::observability::Metrics;
use carprice::interfaces::http::run_server;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve used car price predictions over HTTP")]
struct Args {
    /// Address to bind, overrides API_HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides API_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Model artifact, overrides MODEL_PATH
    #[arg(short, long)]
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Car price service {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?.server;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(model_path) = args.model_path {
        config.model_path = model_path;
    }

    let predictor = SmartCorePredictor::load(&config.model_path).with_context(|| {
        format!(
            "Failed to load model from {}",
            config.model_path.display()
        )
    })?;

    let metrics = Metrics::new()?;
    let service = PredictionService::new(Arc::new(predictor), config.category_validation, metrics);

    run_server(&config, service).await
}
