//! Pricing engine module.
//!
//! Bidirectional pricing: given any valid combination of net rate, public
//! price and factor, compute the rest plus the margin. Pure calculations live
//! in `calculators`, `seasons` and `quotes`; `routes` exposes them over
//! HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod quotes;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod seasons;

// Re-export commonly used items
pub use calculators::{
    calc_net_revenue, compute_net_from_public, compute_public_from_net, derive_from_both_rates,
    get_effective_commission, resolve_pricing, round_currency, round_factor, round_half_up,
    round_percent, DEFAULT_FACTOR, FACTOR_MAX, FACTOR_MIN,
};
pub use models::{CommissionOptions, PartialPricing, PricingInput, PricingResult, SupplierPlan};
pub use routes::router;
pub use seasons::{find_seasonal_rate, SeasonalRate};
