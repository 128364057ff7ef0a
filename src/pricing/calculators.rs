//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access, no logging.
//! Given any valid combination of net rate / public price / factor these
//! compute the missing values and the margin.

use rust_decimal::prelude::*;

use crate::error::PricingError;

use super::models::{CommissionOptions, PartialPricing, PricingInput, PricingResult, SupplierPlan};

/// Factor applied to a net rate when none is given (1.5).
pub const DEFAULT_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Lowest accepted factor (0.5).
pub const FACTOR_MIN: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
/// Highest accepted factor (10.0).
pub const FACTOR_MAX: Decimal = Decimal::from_parts(100, 0, 0, false, 1);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Account age (months) below which founders pay no Viator commission.
const FOUNDER_FREE_MONTHS: u32 = 6;

/// Round half-up (away from zero) to `places` decimal places.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use sat_connect::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_half_up(dec!(1.005), 2), dec!(1.01));
/// assert_eq!(round_half_up(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_half_up(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency values carry 2 decimal places.
pub fn round_currency(amount: Decimal) -> Decimal {
    round_half_up(amount, 2)
}

/// Factors carry 5 decimal places.
pub fn round_factor(factor: Decimal) -> Decimal {
    round_half_up(factor, 5)
}

/// Percentages carry 2 decimal places.
pub fn round_percent(percent: Decimal) -> Decimal {
    round_half_up(percent, 2)
}

/// Reject factors outside `[FACTOR_MIN, FACTOR_MAX]`.
pub fn validate_factor(factor: Decimal) -> Result<(), PricingError> {
    if factor < FACTOR_MIN || factor > FACTOR_MAX {
        return Err(PricingError::FactorOutOfRange {
            factor,
            min: FACTOR_MIN,
            max: FACTOR_MAX,
        });
    }
    Ok(())
}

fn require_positive(field: &'static str, value: Decimal) -> Result<(), PricingError> {
    if value <= Decimal::ZERO {
        return Err(PricingError::InvalidAmount { field, value });
    }
    Ok(())
}

fn out_of_range(field: &'static str) -> PricingError {
    PricingError::AmountOutOfRange { field }
}

fn build_result(net: Decimal, public: Decimal, factor: Decimal) -> Result<PricingResult, PricingError> {
    let margin = (public - net)
        .checked_div(public)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .ok_or_else(|| out_of_range("margin_percent"))?;

    Ok(PricingResult {
        net: round_currency(net),
        public: round_currency(public),
        factor: round_factor(factor),
        margin_percent: round_percent(margin),
    })
}

/// Case A: both rates known, derive the factor.
///
/// `derive_from_both_rates(1000, 1650)` gives factor 1.65 and a 39.39% margin.
/// A ratio too large to represent is reported as an out-of-range factor.
pub fn derive_from_both_rates(net: Decimal, public: Decimal) -> Result<PricingResult, PricingError> {
    require_positive("net", net)?;
    require_positive("public", public)?;

    let factor = round_factor(public.checked_div(net).unwrap_or(Decimal::MAX));
    validate_factor(factor)?;

    build_result(net, public, factor)
}

/// Case B: suggest a public price from the net rate.
///
/// A missing or zero factor falls back to [`DEFAULT_FACTOR`].
pub fn compute_public_from_net(
    net: Decimal,
    factor: Option<Decimal>,
) -> Result<PricingResult, PricingError> {
    let factor = factor
        .filter(|f| !f.is_zero())
        .unwrap_or(DEFAULT_FACTOR);

    require_positive("net", net)?;
    validate_factor(factor)?;

    let public = net.checked_mul(factor).ok_or_else(|| out_of_range("public"))?;
    build_result(net, round_currency(public), factor)
}

/// Case C: back-calculate the net rate from a public price and factor.
pub fn compute_net_from_public(public: Decimal, factor: Decimal) -> Result<PricingResult, PricingError> {
    require_positive("public", public)?;
    validate_factor(factor)?;

    let net = public.checked_div(factor).ok_or_else(|| out_of_range("net"))?;
    build_result(round_currency(net), public, factor)
}

impl PricingInput {
    pub fn resolve(self) -> Result<PricingResult, PricingError> {
        match self {
            PricingInput::Full { net, public } => derive_from_both_rates(net, public),
            PricingInput::NetOnly { net, factor } => compute_public_from_net(net, factor),
            PricingInput::PublicOnly { public, factor } => compute_net_from_public(public, factor),
        }
    }
}

/// Resolve whichever case the partial data supports.
///
/// Priority: both rates (A), then net alone (B), then public + factor (C).
/// This is the entry point for import pipelines and API handlers.
pub fn resolve_pricing(partial: &PartialPricing) -> Result<PricingResult, PricingError> {
    partial
        .classify()
        .ok_or(PricingError::InsufficientPricingData)?
        .resolve()
}

/// Net revenue left after an OTA takes its commission (0-100 %).
///
/// `calc_net_revenue(1650, 25) == 1237.50`
pub fn calc_net_revenue(pvp: Decimal, commission_percent: Decimal) -> Result<Decimal, PricingError> {
    if commission_percent < Decimal::ZERO || commission_percent > HUNDRED {
        return Err(PricingError::InvalidCommission {
            commission: commission_percent,
        });
    }
    Ok(round_currency(pvp * (Decimal::ONE - commission_percent / HUNDRED)))
}

/// Commission actually charged by a channel.
///
/// An explicit override always wins. Otherwise founders selling on Viator
/// pay nothing while their account is younger than six months.
pub fn get_effective_commission(
    channel_name: &str,
    base_commission: Decimal,
    options: &CommissionOptions,
) -> Decimal {
    if let Some(commission) = options.override_commission {
        return commission;
    }

    let founder_window = matches!(options.supplier_plan, Some(SupplierPlan::Founder))
        && channel_name.to_lowercase() == "viator"
        && options
            .account_age_months
            .is_some_and(|months| months < FOUNDER_FREE_MONTHS);

    if founder_window {
        Decimal::ZERO
    } else {
        base_commission
    }
}
