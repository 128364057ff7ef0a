//! Margin quotes, tour rate sheets and currency conversion.
//!
//! Built on top of the calculators; same rounding and factor rules apply.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

use super::calculators::{compute_public_from_net, round_currency, round_percent, DEFAULT_FACTOR};

/// Minimum margin (percent) a quote must keep to pass the profit shield.
pub const DEFAULT_MIN_MARGIN_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteMode {
    /// Price derived from cost plus factor
    BottomUp,
    /// Margin derived from a market-fixed price
    TopDown,
}

/// Margin breakdown for a single price point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarginQuote {
    pub suggested_pvp: Decimal,
    pub net_rate: Decimal,
    pub margin_amount: Decimal,
    pub margin_percent: Decimal,
    pub mode: QuoteMode,
}

fn quote(pvp: Decimal, net: Decimal, mode: QuoteMode) -> Result<MarginQuote, PricingError> {
    let margin_amount = pvp - net;
    let margin_percent = margin_amount
        .checked_div(pvp)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(PricingError::AmountOutOfRange {
            field: "margin_percent",
        })?;

    Ok(MarginQuote {
        suggested_pvp: round_currency(pvp),
        net_rate: round_currency(net),
        margin_amount: round_currency(margin_amount),
        margin_percent: round_percent(margin_percent),
        mode,
    })
}

/// Propose a PVP from the net cost (bottom-up).
///
/// Priced through [`compute_public_from_net`], so a missing or zero factor
/// means the default 1.5: a 50% markup on cost, i.e. a 33.33% margin on price.
pub fn propose_pvp(net: Decimal, factor: Option<Decimal>) -> Result<MarginQuote, PricingError> {
    let priced = compute_public_from_net(net, factor)?;
    quote(priced.public, net, QuoteMode::BottomUp)
}

/// Margin left when the market dictates the PVP (top-down).
pub fn reverse_margin(pvp: Decimal, net: Decimal) -> Result<MarginQuote, PricingError> {
    if pvp <= Decimal::ZERO {
        return Err(PricingError::InvalidAmount {
            field: "pvp",
            value: pvp,
        });
    }
    if net < Decimal::ZERO {
        return Err(PricingError::InvalidAmount {
            field: "net",
            value: net,
        });
    }

    quote(pvp, net, QuoteMode::TopDown)
}

/// Whether the quote keeps at least `min_margin_percent` (default 20).
pub fn check_profit_shield(quote: &MarginQuote, min_margin_percent: Option<Decimal>) -> bool {
    quote.margin_percent >= min_margin_percent.unwrap_or(DEFAULT_MIN_MARGIN_PERCENT)
}

/// Net rates and factors stored for one tour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TourRates {
    pub net_rate_adult: Decimal,
    #[serde(default = "default_factor")]
    pub shared_factor: Decimal,
    #[serde(default)]
    pub net_rate_child: Option<Decimal>,
    #[serde(default = "default_factor")]
    pub private_factor: Decimal,
    #[serde(default)]
    pub private_min_pax: Option<u32>,
    #[serde(default)]
    pub private_min_pax_net_rate: Option<Decimal>,
}

fn default_factor() -> Decimal {
    DEFAULT_FACTOR
}

/// Suggested public prices for every variant of a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourPriceSheet {
    pub suggested_pvp_adult: Decimal,
    pub suggested_pvp_child: Option<Decimal>,
    pub suggested_pvp_private: Option<Decimal>,
    pub per_pax_cost: Option<Decimal>,
}

/// Private net rate split across the minimum group size.
pub fn calculate_per_pax_cost(private_net_rate: Decimal, min_pax: u32) -> Result<Decimal, PricingError> {
    if min_pax == 0 {
        return Err(PricingError::InvalidPax);
    }
    Ok(round_currency(private_net_rate / Decimal::from(min_pax)))
}

/// Shared adult/child prices use the shared factor, the private price uses
/// the private factor.
pub fn calculate_tour_pricing(rates: &TourRates) -> Result<TourPriceSheet, PricingError> {
    let adult = compute_public_from_net(rates.net_rate_adult, Some(rates.shared_factor))?;

    let child = rates
        .net_rate_child
        .map(|net| compute_public_from_net(net, Some(rates.shared_factor)))
        .transpose()?;

    let private = rates
        .private_min_pax_net_rate
        .map(|net| compute_public_from_net(net, Some(rates.private_factor)))
        .transpose()?;

    let per_pax_cost = match (rates.private_min_pax_net_rate, rates.private_min_pax) {
        (Some(net), Some(pax)) => Some(calculate_per_pax_cost(net, pax)?),
        _ => None,
    };

    Ok(TourPriceSheet {
        suggested_pvp_adult: adult.public,
        suggested_pvp_child: child.map(|r| r.public),
        suggested_pvp_private: private.map(|r| r.public),
        per_pax_cost,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Mxn,
}

/// Convert between MXN and USD; `exchange_rate` is MXN per USD.
pub fn convert_currency(
    amount: Decimal,
    from: Currency,
    to: Currency,
    exchange_rate: Decimal,
) -> Result<Decimal, PricingError> {
    if exchange_rate <= Decimal::ZERO {
        return Err(PricingError::InvalidExchangeRate { rate: exchange_rate });
    }

    let converted = match (from, to) {
        (Currency::Mxn, Currency::Usd) => amount.checked_div(exchange_rate),
        (Currency::Usd, Currency::Mxn) => amount.checked_mul(exchange_rate),
        _ => Some(amount),
    };
    converted
        .map(round_currency)
        .ok_or(PricingError::AmountOutOfRange { field: "amount" })
}
