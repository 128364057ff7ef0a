//! SAT Connect pricing and audit service.
//!
//! Reads configuration from the environment (and `.env`).

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sat_connect::cache::warm_cache;
use sat_connect::config::{Config, DEFAULT_LOG_FILTER};
use sat_connect::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!("Starting SAT Connect pricing service...");
    match &config.ota_settings_path {
        Some(path) => info!("OTA settings file: {}", path.display()),
        None => info!("OTA settings file not set, using built-in defaults"),
    }

    let state = AppState::from_config(&config);
    warm_cache(&state.ota_settings, &state.settings_source).await;

    let listener = tokio::net::TcpListener::bind(config.address())
        .await
        .with_context(|| format!("failed to bind {}", config.address()))?;
    info!("Listening on {}", config.address());

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
