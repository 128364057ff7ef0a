//! Seasonal rate lookup.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net rates valid over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalRate {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub net_rate_adult: Decimal,
    #[serde(default)]
    pub net_rate_child: Option<Decimal>,
    #[serde(default)]
    pub factor: Option<Decimal>,
}

impl SeasonalRate {
    /// Whether `at` falls within `[from, to]`, both bounds taken at 00:00 UTC.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        start_of_day(self.from) <= at && at <= start_of_day(self.to)
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// First season whose range contains `at`.
///
/// Overlapping seasons are resolved by slice order: the first match wins.
/// `None` means the caller falls back to base pricing.
pub fn find_seasonal_rate(at: DateTime<Utc>, seasons: &[SeasonalRate]) -> Option<&SeasonalRate> {
    seasons.iter().find(|season| season.contains(at))
}
