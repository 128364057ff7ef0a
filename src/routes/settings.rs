//! OTA settings route handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::cache::{CacheStats, OtaSetting};
use crate::error::Result;
use crate::AppState;

/// Current OTA settings, served through the cache
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OtaSetting>>> {
    let settings = state.ota_settings.settings(&state.settings_source).await?;
    Ok(Json((*settings).clone()))
}

#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub invalidated: bool,
    pub stats: CacheStats,
}

/// Drop cached settings so the next read reloads them
pub async fn invalidate(State(state): State<AppState>) -> Json<InvalidateResponse> {
    state.ota_settings.invalidate().await;
    Json(InvalidateResponse {
        invalidated: true,
        stats: state.ota_settings.stats(),
    })
}
