//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::quotes::MarginQuote;
use super::seasons::SeasonalRate;

/// Response for net revenue calculation
#[derive(Debug, Serialize)]
pub struct NetRevenueResponse {
    pub pvp: Decimal,
    pub commission_percent: Decimal,
    pub net_revenue: Decimal,
}

/// Response for effective commission resolution
#[derive(Debug, Serialize)]
pub struct CommissionResponse {
    pub channel_name: String,
    pub base_commission: Decimal,
    pub effective_commission: Decimal,
}

/// Response for seasonal rate lookup; `season` is null when base pricing applies
#[derive(Debug, Serialize)]
pub struct SeasonalRateResponse {
    pub season: Option<SeasonalRate>,
}

/// Margin quote with its profit shield verdict
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: MarginQuote,
    pub profit_shield_ok: bool,
}
