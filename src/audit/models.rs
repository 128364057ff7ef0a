//! Tour records consumed by the audit engine and the diagnostics it returns.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Listing status of a tour on one distribution channel.
///
/// Only the exact string `"Active"` is active. Other strings mentioning a live
/// keyword (`published`, `live`, `enabled`, `active` in any case) are listed,
/// unless the keyword is negated (`inactive`, `unpublished`). Anything else
/// reads as inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChannelStatus {
    Active,
    Listed,
    Inactive,
}

const LIVE_KEYWORDS: [&str; 4] = ["active", "published", "live", "enabled"];
const NEGATED_KEYWORDS: [&str; 3] = ["inactive", "unpublished", "not live"];

impl ChannelStatus {
    /// Counts toward the OTA distribution score.
    pub fn is_listed(self) -> bool {
        matches!(self, ChannelStatus::Active | ChannelStatus::Listed)
    }
}

impl From<String> for ChannelStatus {
    fn from(status: String) -> Self {
        if status == "Active" {
            return ChannelStatus::Active;
        }
        let status = status.to_lowercase();
        if NEGATED_KEYWORDS.iter().any(|keyword| status.contains(keyword)) {
            ChannelStatus::Inactive
        } else if LIVE_KEYWORDS.iter().any(|keyword| status.contains(keyword)) {
            ChannelStatus::Listed
        } else {
            ChannelStatus::Inactive
        }
    }
}

impl From<ChannelStatus> for String {
    fn from(status: ChannelStatus) -> Self {
        match status {
            ChannelStatus::Active => "Active",
            ChannelStatus::Listed => "Live",
            ChannelStatus::Inactive => "Inactive",
        }
        .to_string()
    }
}

/// Flat snapshot of a tour, loaded by the caller from persisted data.
///
/// Every optional field follows the same rule: absent, empty, or zero all
/// mean "missing" for audit purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourInput {
    // Identity
    pub id: Option<String>,
    pub name: String,
    pub provider: String,

    // Economics
    pub net_rate: Option<Decimal>,
    pub public_price: Option<Decimal>,
    pub net_child: Option<Decimal>,
    pub net_private: Option<Decimal>,
    pub factor_shared: Option<Decimal>,
    pub factor_private: Option<Decimal>,

    // Operations
    pub min_pax_shared: Option<u32>,
    pub min_pax_private: Option<u32>,
    /// Age below which infants ride free; zero is a valid threshold.
    pub infant_age: Option<u32>,
    pub duration: Option<String>,
    pub ops_days: Option<String>,
    pub cxl_policy: Option<String>,
    pub meeting_point: Option<String>,

    // Marketing
    pub images: Vec<String>,
    pub landing_page_url: Option<String>,
    pub storytelling: Option<String>,

    /// Channel key (`expedia`, `viator`, ...) to listing status
    pub channels: BTreeMap<String, ChannelStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthScore {
    Healthy,
    Incomplete,
    /// Only produced for rows without an id
    Critical,
}

/// Data completeness verdict with a display line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductHealth {
    pub score: HealthScore,
    pub details: String,
}

/// OTA coverage: `score` is the display line, e.g. "⚠️ Fair (2/4 Active)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionAudit {
    pub score: String,
    pub active_count: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EconomicsStatus {
    /// Enough room for wholesale commissions (multiplier >= 1.5)
    B2bReady,
    /// Profitable, but only when sold direct
    B2cOnly,
    LossWarning,
}

/// Profitability snapshot.
///
/// `margin` is a fraction of the public price (0.33), not a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Economics {
    pub margin: Decimal,
    pub multiplier: Decimal,
    pub status: EconomicsStatus,
}

/// Everything the dashboard shows about one tour, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourDiagnostics {
    pub health: ProductHealth,
    pub distribution: DistributionAudit,
    pub economics: Economics,
}
