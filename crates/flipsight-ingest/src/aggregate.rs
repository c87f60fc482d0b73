//! Reduction of raw page signals into a stored summary.

use chrono::NaiveDate;

use flipsight_core::{DemandVolumes, ListingSignals, MarketSummary};

/// Builds the per-target summary from one run's raw signals.
///
/// Empty inputs produce zeros; a summary always exists even when every
/// upstream source degraded. Price figures are rounded to two decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(
    signals: &ListingSignals,
    demand: DemandVolumes,
    keywords: Vec<String>,
    observed_on: NaiveDate,
) -> MarketSummary {
    let total: f64 = signals.prices.iter().sum();
    let avg = if signals.prices.is_empty() {
        0.0
    } else {
        total / signals.prices.len() as f64
    };

    MarketSummary {
        avg_sale_price: round2(avg),
        total_listings: total_listing_count(&signals.listing_counts),
        total_sale_amount: round2(total),
        demand,
        keywords,
        observed_on,
    }
}

/// Sum of the count fragments, each stripped of one trailing `+` before an
/// integer parse. Fragments that still fail to parse are skipped; the sum
/// saturates at `i64::MAX` rather than overflowing on hostile input.
#[must_use]
pub fn total_listing_count(fragments: &[String]) -> i64 {
    fragments
        .iter()
        .filter_map(|fragment| {
            let digits = fragment.strip_suffix('+').unwrap_or(fragment);
            digits.parse::<i64>().ok()
        })
        .fold(0, i64::saturating_add)
}

/// Half-away-from-zero rounding to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
