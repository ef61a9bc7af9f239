//! Desktop form for the used car price predictor.
//!
//! Collects the vehicle attributes, sends them to the prediction service
//! (`BACKEND_URL`) and shows the predicted price.

use carprice::application::client::PredictionClient;
use carprice::config::Config;
use carprice::interfaces::design_system::DesignSystem;
use carprice::interfaces::ui::PricePredictorApp;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let config = Config::from_env()?.client;
    info!(
        backend_url = %config.backend_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting {}",
        config.app_name
    );

    // Requests run here so the UI thread never blocks on the network
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let client = PredictionClient::new(&config)?;
    let app = PricePredictorApp::new(config.app_name.clone(), client, runtime.handle().clone());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_title(&config.app_name),
        ..Default::default()
    };

    eframe::run_native(
        &config.app_name,
        native_options,
        Box::new(move |cc| {
            DesignSystem::apply_style(&cc.egui_ctx);
            app.check_backend(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    runtime.shutdown_background();
    Ok(())
}
