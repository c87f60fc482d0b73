use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog row eligible for enrichment. The ingestion pipeline only ever
/// needs the identifier and the human-readable name it searches by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub id: i64,
    pub name: String,
}

/// Marketplace regions demand volumes are collected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Us,
    Au,
    Uk,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Us, Locale::Au, Locale::Uk];

    /// Country code the demand API expects. The UK is addressed as `gb` on
    /// the wire even though it is stored under a `uk` column.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Us => "us",
            Locale::Au => "au",
            Locale::Uk => "gb",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Us => write!(f, "us"),
            Locale::Au => write!(f, "au"),
            Locale::Uk => write!(f, "uk"),
        }
    }
}

/// Raw numeric signals extracted from one listing results page: one price
/// per parseable result entry, plus the page's result-count fragments in
/// cleaned-but-unparsed form (digits with an optional trailing `+`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingSignals {
    pub prices: Vec<f64>,
    pub listing_counts: Vec<String>,
}

/// Formatted search volume per locale, e.g. `"40,500"`. The literal `"0"`
/// stands in for a locale whose lookup was exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandVolumes {
    pub us: String,
    pub au: String,
    pub uk: String,
}

impl DemandVolumes {
    /// All three locales at the `"0"` fallback.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            us: "0".to_string(),
            au: "0".to_string(),
            uk: "0".to_string(),
        }
    }

    pub fn set(&mut self, locale: Locale, value: String) {
        match locale {
            Locale::Us => self.us = value,
            Locale::Au => self.au = value,
            Locale::Uk => self.uk = value,
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Us => &self.us,
            Locale::Au => &self.au,
            Locale::Uk => &self.uk,
        }
    }
}

/// One target's aggregated marketplace observation for a single run.
/// Summaries are rebuilt from scratch every cycle and overwrite the stored
/// row wholesale; nothing here accumulates across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    /// Mean sold price rounded to 2 decimals, `0.0` when no price parsed.
    pub avg_sale_price: f64,
    /// Sum of the parseable listing-count fragments, `0` when none parsed.
    pub total_listings: i64,
    /// Sum of sold prices rounded to 2 decimals.
    pub total_sale_amount: f64,
    pub demand: DemandVolumes,
    /// Related search keywords; empty when the suggestion source failed.
    pub keywords: Vec<String>,
    /// Date stamp shared by every summary produced in the same run.
    pub observed_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_match_demand_api() {
        assert_eq!(Locale::Us.code(), "us");
        assert_eq!(Locale::Au.code(), "au");
        assert_eq!(Locale::Uk.code(), "gb");
    }

    #[test]
    fn locale_display_uses_storage_suffix() {
        assert_eq!(Locale::Uk.to_string(), "uk");
    }

    #[test]
    fn demand_volumes_zeroed_then_set() {
        let mut volumes = DemandVolumes::zeroed();
        assert_eq!(volumes.get(Locale::Au), "0");
        volumes.set(Locale::Au, "1,200".to_string());
        assert_eq!(volumes.get(Locale::Au), "1,200");
        assert_eq!(volumes.get(Locale::Us), "0");
    }

    #[test]
    fn market_summary_serializes_with_iso_date() {
        let summary = MarketSummary {
            avg_sale_price: 15.0,
            total_listings: 15,
            total_sale_amount: 30.0,
            demand: DemandVolumes::zeroed(),
            keywords: vec!["vintage camera".to_string()],
            observed_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["observed_on"], "2025-06-01");
        assert_eq!(json["demand"]["uk"], "0");
    }
}
