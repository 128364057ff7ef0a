//! SAT Connect pricing and audit service.
//!
//! Two stateless cores, [`pricing`] (bidirectional price resolution) and
//! [`audit`] (tour health, distribution and economics), exposed over a small
//! JSON API for the inventory dashboard.

pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::{OtaSettingsCache, SettingsSource};
use crate::config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub ota_settings: OtaSettingsCache,
    pub settings_source: SettingsSource,
}

impl AppState {
    pub fn new(ota_settings: OtaSettingsCache, settings_source: SettingsSource) -> Self {
        Self {
            ota_settings,
            settings_source,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            OtaSettingsCache::new(config.ota_cache_ttl),
            SettingsSource::new(config.ota_settings_path.clone()),
        )
    }
}

/// Assemble the full router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/ota-settings", get(routes::settings::list))
        .route("/api/ota-settings/invalidate", post(routes::settings::invalidate))
        .nest("/api/pricing", pricing::router())
        .nest("/api/audit", audit::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
