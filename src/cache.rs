//! In-memory caching using moka
//!
//! OTA commission settings change rarely but are read on every commission
//! lookup, so they are kept in memory behind a short TTL. The cache is an
//! explicit object owned by `AppState`, never module state.

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};

/// Default TTL: 5 minutes
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Commission settings for one OTA channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtaSetting {
    pub id: i32,
    pub channel_key: String,
    pub channel_name: String,
    pub default_commission: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Where OTA settings come from on a cache miss
#[derive(Debug, Clone, Default)]
pub struct SettingsSource {
    /// JSON file holding `[OtaSetting]`; built-in defaults when unset
    pub path: Option<PathBuf>,
}

impl SettingsSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load settings, sorted by channel name.
    pub async fn load(&self) -> Result<Vec<OtaSetting>> {
        let mut settings = match &self.path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| AppError::Settings(format!("{}: {}", path.display(), e)))?;
                serde_json::from_str::<Vec<OtaSetting>>(&raw)
                    .map_err(|e| AppError::Settings(format!("{}: {}", path.display(), e)))?
            }
            None => default_settings(),
        };
        settings.sort_by(|a, b| a.channel_name.cmp(&b.channel_name));
        Ok(settings)
    }
}

/// Built-in commissions for the four audited channels
pub fn default_settings() -> Vec<OtaSetting> {
    [
        (1, "expedia", "Expedia", 20),
        (2, "viator", "Viator", 25),
        (3, "gyg", "GetYourGuide", 25),
        (4, "civitatis", "Civitatis", 20),
    ]
    .into_iter()
    .map(|(id, key, name, commission)| OtaSetting {
        id,
        channel_key: key.to_string(),
        channel_name: name.to_string(),
        default_commission: Decimal::from(commission),
        is_active: true,
    })
    .collect()
}

/// TTL cache over the full OTA settings list (single entry)
#[derive(Clone)]
pub struct OtaSettingsCache {
    settings: Cache<(), Arc<Vec<OtaSetting>>>,
    ttl: Duration,
}

impl OtaSettingsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            settings: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            ttl,
        }
    }

    /// Serve from memory when fresh, otherwise run `load` and keep the result.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<Vec<OtaSetting>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<OtaSetting>>>,
    {
        if let Some(cached) = self.settings.get(&()).await {
            debug!("OTA settings cache HIT");
            return Ok(cached);
        }

        debug!("OTA settings cache MISS");
        let loaded = Arc::new(load().await?);
        self.settings.insert((), Arc::clone(&loaded)).await;
        info!("Cached {} OTA settings", loaded.len());

        Ok(loaded)
    }

    /// Settings from `source`, through the cache.
    pub async fn settings(&self, source: &SettingsSource) -> Result<Arc<Vec<OtaSetting>>> {
        self.get_or_load(|| source.load()).await
    }

    /// Default commission of an active channel, matched case-insensitively by key.
    pub async fn commission_for(&self, source: &SettingsSource, channel_key: &str) -> Result<Option<Decimal>> {
        let settings = self.settings(source).await?;
        Ok(settings
            .iter()
            .find(|s| s.is_active && s.channel_key.eq_ignore_ascii_case(channel_key))
            .map(|s| s.default_commission))
    }

    /// Drop cached settings; call after settings are edited.
    pub async fn invalidate(&self) {
        self.settings.invalidate(&()).await;
        info!("OTA settings cache invalidated");
    }

    /// Cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        let cached = self.settings.iter().next().map(|(_, settings)| settings);
        CacheStats {
            is_cached: cached.is_some(),
            entries_count: cached.map_or(0, |settings| settings.len()),
            ttl_seconds: self.ttl.as_secs(),
        }
    }
}

impl Default for OtaSettingsCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub is_cached: bool,
    pub entries_count: usize,
    pub ttl_seconds: u64,
}

/// Load settings once at startup so the first request is a cache hit.
pub async fn warm_cache(cache: &OtaSettingsCache, source: &SettingsSource) {
    match cache.settings(source).await {
        Ok(settings) => info!("OTA settings cache warmed with {} channels", settings.len()),
        Err(e) => warn!("Failed to warm OTA settings cache: {}", e),
    }
}
