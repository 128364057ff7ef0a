//! Service-level route handlers (health, OTA settings)

pub mod health;
pub mod settings;
