//! Request DTOs for pricing API endpoints.
//!
//! Amounts deserialize from JSON numbers or strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{CommissionOptions, SupplierPlan};
use super::seasons::SeasonalRate;

/// Request to compute revenue after commission
#[derive(Debug, Deserialize)]
pub struct NetRevenueRequest {
    pub pvp: Decimal,
    pub commission_percent: Decimal,
}

/// Request to resolve a channel's effective commission
#[derive(Debug, Deserialize)]
pub struct CommissionRequest {
    pub channel_name: String,
    /// Looked up from OTA settings when omitted
    #[serde(default)]
    pub base_commission: Option<Decimal>,
    #[serde(default)]
    pub supplier_plan: Option<SupplierPlan>,
    #[serde(default)]
    pub account_age_months: Option<u32>,
    #[serde(default)]
    pub override_commission: Option<Decimal>,
}

impl CommissionRequest {
    pub fn options(&self) -> CommissionOptions {
        CommissionOptions {
            supplier_plan: self.supplier_plan,
            account_age_months: self.account_age_months,
            override_commission: self.override_commission,
        }
    }
}

/// Request to find the season covering a date
#[derive(Debug, Deserialize)]
pub struct SeasonalRateRequest {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub seasons: Vec<SeasonalRate>,
}

/// Request for a bottom-up quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub net: Decimal,
    #[serde(default)]
    pub factor: Option<Decimal>,
    #[serde(default)]
    pub min_margin_percent: Option<Decimal>,
}

/// Request for a top-down margin check
#[derive(Debug, Deserialize)]
pub struct ReverseMarginRequest {
    pub pvp: Decimal,
    pub net: Decimal,
    #[serde(default)]
    pub min_margin_percent: Option<Decimal>,
}
