//! HTTP routes for the audit engine.
//!
//! Audits never fail: every well-formed tour body gets a 200 with its
//! classification, however incomplete the tour is.

use axum::{routing::post, Json, Router};

use crate::AppState;

use super::engine::{audit_distribution, audit_product_health, audit_tour};
use super::models::{DistributionAudit, ProductHealth, TourDiagnostics, TourInput};
use super::suitability::{assess_distribution, DistributionCheck};

/// Audit router, mounted under `/api/audit`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tour", post(tour))
        .route("/health", post(health))
        .route("/distribution", post(distribution))
        .route("/suitability", post(suitability))
}

async fn tour(Json(tour): Json<TourInput>) -> Json<TourDiagnostics> {
    let diagnostics = audit_tour(&tour);
    tracing::debug!(
        "Audited tour {:?} ({}): {:?}, {} channels active, {:?}",
        tour.id,
        tour.name,
        diagnostics.health.score,
        diagnostics.distribution.active_count,
        diagnostics.economics.status
    );
    Json(diagnostics)
}

async fn health(Json(tour): Json<TourInput>) -> Json<ProductHealth> {
    Json(audit_product_health(&tour))
}

async fn distribution(Json(tour): Json<TourInput>) -> Json<DistributionAudit> {
    Json(audit_distribution(&tour))
}

async fn suitability(Json(tour): Json<TourInput>) -> Json<DistributionCheck> {
    Json(assess_distribution(&tour))
}
