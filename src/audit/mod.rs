//! Tour audit engine.
//!
//! Classifies a tour's data completeness ("health"), OTA distribution
//! coverage and basic profitability from a flat snapshot. Stateless: results
//! are recomputed on demand and never persisted by this module.

pub mod engine;
pub mod models;
pub mod routes;
pub mod suitability;

pub use engine::{analyze_economics, audit_distribution, audit_product_health, audit_tour, OTA_CHANNELS};
pub use models::{
    ChannelStatus, DistributionAudit, Economics, EconomicsStatus, HealthScore, ProductHealth,
    TourDiagnostics, TourInput,
};
pub use routes::router;
pub use suitability::{
    active_channels, assess_distribution, assess_global_suitability, assess_tour_suitability,
    next_internal_id, ota_distribution_score, ota_score_rating, DistributionCheck, SuitabilityCheck,
};
