//! Global distribution gate, OTA coverage score and internal id assignment.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::audit_product_health;
use super::models::{ChannelStatus, HealthScore, ProductHealth, TourInput};

/// Ids below this are internal (no Bokun id was assigned).
const INTERNAL_ID_CEILING: i64 = 100;
/// First internal id handed out when none exist yet.
const FIRST_INTERNAL_ID: i64 = 7;

const POINTS_PER_CHANNEL: usize = 20;
const MAX_OTA_SCORE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitabilityCheck {
    pub is_suitable: bool,
    pub issues: Vec<String>,
}

/// Whether a tour may be pushed to global OTA distribution.
///
/// Every gate is evaluated so callers can show all blocking issues at once.
pub fn assess_global_suitability(
    health: &ProductHealth,
    net: Option<Decimal>,
    public_price: Option<Decimal>,
    cxl_policy: Option<&str>,
) -> SuitabilityCheck {
    let mut issues = Vec::new();

    if health.score != HealthScore::Healthy {
        issues.push("Product health must be HEALTHY for global distribution".to_string());
    }

    if cxl_policy.map_or(true, |p| p.trim().is_empty()) {
        issues.push("Cancellation policy is required for distribution".to_string());
    }

    if let (Some(net), Some(public)) = (net, public_price) {
        if public <= net {
            issues.push("Negative price parity detected (PVP <= Net Rate)".to_string());
        }
    }

    SuitabilityCheck {
        is_suitable: issues.is_empty(),
        issues,
    }
}

/// Suitability straight from a tour snapshot.
pub fn assess_tour_suitability(tour: &TourInput) -> SuitabilityCheck {
    let health = audit_product_health(tour);
    assess_global_suitability(
        &health,
        tour.net_rate,
        tour.public_price,
        tour.cxl_policy.as_deref(),
    )
}

/// Gate verdict plus OTA coverage, as shown on the distribution panel.
///
/// `is_suitable` comes from the gates alone; zero coverage is reported as an
/// issue without blocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionCheck {
    pub is_suitable: bool,
    pub ota_score: u8,
    pub rating: String,
    pub active_channels: Vec<String>,
    pub issues: Vec<String>,
}

/// Channels whose status reads as live, in key order.
pub fn active_channels(channels: &BTreeMap<String, ChannelStatus>) -> Vec<String> {
    channels
        .iter()
        .filter(|(_, status)| status.is_listed())
        .map(|(channel, _)| channel.clone())
        .collect()
}

/// 20 points per live channel, capped at 100.
pub fn ota_distribution_score(channels: &BTreeMap<String, ChannelStatus>) -> u8 {
    let live = channels.values().filter(|status| status.is_listed()).count();
    (live * POINTS_PER_CHANNEL).min(MAX_OTA_SCORE) as u8
}

pub fn ota_score_rating(score: u8) -> &'static str {
    match score {
        80.. => "Excellent Distribution",
        60..=79 => "Good Distribution",
        40..=59 => "Moderate Distribution",
        1..=39 => "Limited Distribution",
        0 => "No Distribution",
    }
}

/// Suitability gates and OTA coverage for one tour.
pub fn assess_distribution(tour: &TourInput) -> DistributionCheck {
    let SuitabilityCheck {
        is_suitable,
        mut issues,
    } = assess_tour_suitability(tour);

    let ota_score = ota_distribution_score(&tour.channels);
    if ota_score == 0 {
        issues.push("No active OTA channels detected".to_string());
    }

    DistributionCheck {
        is_suitable,
        ota_score,
        rating: ota_score_rating(ota_score).to_string(),
        active_channels: active_channels(&tour.channels),
        issues,
    }
}

/// Next free internal id, for tours imported without a Bokun id.
pub fn next_internal_id<S: AsRef<str>>(existing_ids: &[S]) -> String {
    existing_ids
        .iter()
        .filter_map(|id| id.as_ref().trim().parse::<i64>().ok())
        .filter(|n| *n > 0 && *n < INTERNAL_ID_CEILING)
        .max()
        .map_or(FIRST_INTERNAL_ID, |max| max + 1)
        .to_string()
}
