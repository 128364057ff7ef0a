//! Value types for pricing resolution.
//!
//! Everything here is a plain value: no shared state, no I/O.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the three resolvable pricing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingInput {
    /// Case A: both rates known, factor is derived.
    Full { net: Decimal, public: Decimal },
    /// Case B: net known, public is suggested from the factor (default 1.5).
    NetOnly { net: Decimal, factor: Option<Decimal> },
    /// Case C: public and factor known, net is back-calculated.
    PublicOnly { public: Decimal, factor: Decimal },
}

/// Loosely-populated pricing data as it arrives from forms and imports.
///
/// A field counts as present only when it is `Some` and strictly positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PartialPricing {
    #[serde(default)]
    pub net: Option<Decimal>,
    #[serde(default)]
    pub public: Option<Decimal>,
    #[serde(default)]
    pub factor: Option<Decimal>,
}

impl PartialPricing {
    pub fn net(net: Decimal) -> Self {
        Self {
            net: Some(net),
            ..Self::default()
        }
    }

    pub fn both(net: Decimal, public: Decimal) -> Self {
        Self {
            net: Some(net),
            public: Some(public),
            factor: None,
        }
    }

    /// Pick the resolvable case, in priority order A, B, C.
    ///
    /// Returns `None` when no combination holds (e.g. only a factor).
    pub fn classify(&self) -> Option<PricingInput> {
        let net = positive(self.net);
        let public = positive(self.public);
        let factor = positive(self.factor);

        match (net, public, factor) {
            (Some(net), Some(public), _) => Some(PricingInput::Full { net, public }),
            (Some(net), None, factor) => Some(PricingInput::NetOnly { net, factor }),
            (None, Some(public), Some(factor)) => Some(PricingInput::PublicOnly { public, factor }),
            _ => None,
        }
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

/// Complete, internally consistent pricing for one tour/channel.
///
/// `factor == round(public / net, 5)` and
/// `margin_percent == round((public - net) / public * 100, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    pub net: Decimal,
    pub public: Decimal,
    pub factor: Decimal,
    pub margin_percent: Decimal,
}

/// Supplier subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierPlan {
    Founder,
    Standard,
}

/// Inputs that can alter a channel's base commission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CommissionOptions {
    #[serde(default)]
    pub supplier_plan: Option<SupplierPlan>,
    #[serde(default)]
    pub account_age_months: Option<u32>,
    /// Per-tour override; wins over every other rule when set.
    #[serde(default)]
    pub override_commission: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classify_prefers_full_data() {
        let partial = PartialPricing {
            net: Some(dec!(1000)),
            public: Some(dec!(1650)),
            factor: Some(dec!(2)),
        };
        assert_eq!(
            partial.classify(),
            Some(PricingInput::Full {
                net: dec!(1000),
                public: dec!(1650)
            })
        );
    }

    #[test]
    fn test_classify_net_with_non_positive_public() {
        let partial = PartialPricing {
            net: Some(dec!(1000)),
            public: Some(dec!(0)),
            factor: Some(dec!(-1)),
        };
        assert_eq!(
            partial.classify(),
            Some(PricingInput::NetOnly {
                net: dec!(1000),
                factor: None
            })
        );
    }

    #[test]
    fn test_classify_public_requires_factor() {
        let partial = PartialPricing {
            net: None,
            public: Some(dec!(1500)),
            factor: None,
        };
        assert_eq!(partial.classify(), None);

        let partial = PartialPricing {
            factor: Some(dec!(1.5)),
            ..partial
        };
        assert_eq!(
            partial.classify(),
            Some(PricingInput::PublicOnly {
                public: dec!(1500),
                factor: dec!(1.5)
            })
        );
    }

    #[test]
    fn test_classify_factor_only_is_insufficient() {
        let partial = PartialPricing {
            factor: Some(dec!(1.8)),
            ..PartialPricing::default()
        };
        assert_eq!(partial.classify(), None);
        assert_eq!(PartialPricing::default().classify(), None);
    }

    #[test]
    fn test_supplier_plan_wire_names() {
        let plan: SupplierPlan = serde_json::from_str("\"FOUNDER\"").unwrap();
        assert_eq!(plan, SupplierPlan::Founder);
        assert_eq!(serde_json::to_string(&SupplierPlan::Standard).unwrap(), "\"STANDARD\"");
    }
}
