//! Configuration module
//!
//! Read from the environment (after loading `.env` via dotenvy).

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;
use crate::error::{AppError, Result};

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sat_connect=debug,tower_http=debug";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,
    pub port: u16,
    /// JSON file with OTA commission settings
    pub ota_settings_path: Option<PathBuf>,
    pub ota_cache_ttl: Duration,
}

impl Config {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT={raw}: {e}")))?,
            None => defaults.port,
        };

        let ota_cache_ttl = match lookup("OTA_CACHE_TTL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .map_err(|e| AppError::Config(format!("OTA_CACHE_TTL_SECS={raw}: {e}")))?,
            ),
            None => defaults.ota_cache_ttl,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            ota_settings_path: lookup("OTA_SETTINGS_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            ota_cache_ttl,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ota_settings_path: None,
            ota_cache_ttl: DEFAULT_TTL,
        }
    }
}
