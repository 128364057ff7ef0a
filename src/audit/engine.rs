//! Tour health, distribution and economics audits.
//!
//! Pure and total: missing data becomes a classification (`INCOMPLETE`,
//! `LOSS_WARNING`) and never an error, so results are always displayable.

use rust_decimal::Decimal;

use crate::pricing::round_half_up;

use super::models::{
    ChannelStatus, DistributionAudit, Economics, EconomicsStatus, HealthScore, ProductHealth,
    TourDiagnostics, TourInput,
};

/// Channels counted by [`audit_distribution`], in display order.
pub const OTA_CHANNELS: [&str; 4] = ["expedia", "viator", "gyg", "civitatis"];

/// Multiplier below which a tour cannot absorb wholesale commissions.
const B2B_MIN_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Falsy check shared by every audited field.
trait Filled {
    fn is_filled(&self) -> bool;
}

impl Filled for Option<String> {
    fn is_filled(&self) -> bool {
        self.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl Filled for Option<Decimal> {
    fn is_filled(&self) -> bool {
        self.is_some_and(|v| v > Decimal::ZERO)
    }
}

impl Filled for Option<u32> {
    fn is_filled(&self) -> bool {
        self.is_some()
    }
}

impl Filled for Vec<String> {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

fn missing<'a>(checks: &[(&'a str, bool)]) -> Vec<&'a str> {
    checks
        .iter()
        .filter(|(_, filled)| !filled)
        .map(|(label, _)| *label)
        .collect()
}

/// Classify data completeness.
///
/// Critical fields decide the score; marketing fields only add a warning.
pub fn audit_product_health(tour: &TourInput) -> ProductHealth {
    if tour.id.as_deref() == Some("") {
        return ProductHealth {
            score: HealthScore::Critical,
            details: "❌ ENTER ID".to_string(),
        };
    }

    let critical = missing(&[
        ("Net Rate", tour.net_rate.is_filled()),
        ("Infant Age", tour.infant_age.is_filled()),
        ("Pictures", tour.images.is_filled()),
        ("Duration", tour.duration.is_filled()),
        ("Operation Days", tour.ops_days.is_filled()),
        ("CXL Policy", tour.cxl_policy.is_filled()),
        ("Meeting Pt", tour.meeting_point.is_filled()),
    ]);

    let warnings = missing(&[
        ("Landing Page", tour.landing_page_url.is_filled()),
        ("Storytelling", tour.storytelling.is_filled()),
    ]);

    if !critical.is_empty() {
        let mut details = format!("🚨 INCOMPLETE: {}", critical.join(", "));
        if !warnings.is_empty() {
            details.push_str(&format!(" | ⚠️ Also Missing: {}", warnings.join(", ")));
        }
        return ProductHealth {
            score: HealthScore::Incomplete,
            details,
        };
    }

    let mut details = "✅ PRODUCT HEALTHY".to_string();
    if !warnings.is_empty() {
        details.push_str(&format!(" | ⚠️ Missing: {}", warnings.join(", ")));
    }
    ProductHealth {
        score: HealthScore::Healthy,
        details,
    }
}

/// Count active listings across the fixed OTA channel set.
pub fn audit_distribution(tour: &TourInput) -> DistributionAudit {
    let active_count = OTA_CHANNELS
        .iter()
        .filter(|channel| tour.channels.get(**channel) == Some(&ChannelStatus::Active))
        .count() as u8;

    let score = match active_count {
        4 => "🌐 Healthy (4/4 Active)",
        3 => "✅ Good (3/4 Active)",
        2 => "⚠️ Fair (2/4 Active)",
        1 => "❌ Poor (1/4 Active)",
        _ => "🚨 Critical (0/4 Active)",
    };

    DistributionAudit {
        score: score.to_string(),
        active_count,
    }
}

const UNPRICED: Economics = Economics {
    margin: Decimal::ZERO,
    multiplier: Decimal::ZERO,
    status: EconomicsStatus::LossWarning,
};

/// Margin, multiplier and sales-channel readiness of a price pair.
///
/// A missing or zero price yields the zeroed `LOSS_WARNING` sentinel, and so
/// does a price pair whose ratios exceed the decimal range.
pub fn analyze_economics(net: Option<Decimal>, public_price: Option<Decimal>) -> Economics {
    let (net, public_price) = match (net, public_price) {
        (Some(net), Some(public)) if !net.is_zero() && !public.is_zero() => (net, public),
        _ => return UNPRICED,
    };

    let ratios = public_price.checked_sub(net).and_then(|profit| {
        let multiplier = public_price.checked_div(net)?;
        let margin = profit.checked_div(public_price)?;
        Some((profit, multiplier, margin))
    });
    let Some((profit, multiplier, margin)) = ratios else {
        return UNPRICED;
    };
    let multiplier = round_half_up(multiplier, 2);
    let margin = round_half_up(margin, 2);

    let status = if profit <= Decimal::ZERO {
        EconomicsStatus::LossWarning
    } else if multiplier < B2B_MIN_MULTIPLIER {
        EconomicsStatus::B2cOnly
    } else {
        EconomicsStatus::B2bReady
    };

    Economics {
        margin,
        multiplier,
        status,
    }
}

/// Full diagnostics for one tour.
pub fn audit_tour(tour: &TourInput) -> TourDiagnostics {
    TourDiagnostics {
        health: audit_product_health(tour),
        distribution: audit_distribution(tour),
        economics: analyze_economics(tour.net_rate, tour.public_price),
    }
}
