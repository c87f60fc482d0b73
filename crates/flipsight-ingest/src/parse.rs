//! Tolerant extraction of price and result-count signals from listing HTML.
//!
//! Upstream markup shifts constantly, so nothing in here is an error: a
//! fragment that fails to clean up is dropped and the page simply yields
//! fewer signals.

use regex::Regex;

use flipsight_core::ListingSignals;

/// Sold prices in document order, one per parseable price fragment.
///
/// The inner text of each result entry's price element is stripped of tags,
/// `$` and thousands separators, then parsed as a float. Entries that do
/// not parse (price ranges, foreign currency prefixes, placeholder text)
/// are skipped silently.
#[must_use]
pub fn extract_sale_prices(html: &str) -> Vec<f64> {
    let re = Regex::new(r#"(?is)<span[^>]*class="[^"]*s-item__price[^"]*"[^>]*>(.*?)</span>"#)
        .expect("valid price regex");

    let mut prices = Vec::new();
    for cap in re.captures_iter(html) {
        let text = strip_tags(cap.get(1).map_or("", |m| m.as_str()));
        let cleaned = text.replace(['$', ','], "");
        if let Ok(price) = cleaned.trim().parse::<f64>() {
            prices.push(price);
        }
    }
    prices
}

/// Result-count fragments from the page heading, cleaned to digits plus an
/// optional trailing `+` (`"1,234+ results for ..."` becomes `"1234+"`).
///
/// A heading that cleans down to nothing still contributes an empty
/// fragment; aggregation skips it when summing.
#[must_use]
pub fn extract_listing_counts(html: &str) -> Vec<String> {
    let re =
        Regex::new(r#"(?is)<h1[^>]*class="[^"]*srp-controls__count-heading[^"]*"[^>]*>(.*?)</h1>"#)
            .expect("valid count regex");

    let mut counts = Vec::new();
    for cap in re.captures_iter(html) {
        let text = strip_tags(cap.get(1).map_or("", |m| m.as_str()));
        let without_label = text.replace("results for", "");
        let cleaned: String = without_label
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        counts.push(cleaned);
    }
    counts
}

/// Both signal passes over one fetched page.
#[must_use]
pub fn parse_listing_page(html: &str) -> ListingSignals {
    ListingSignals {
        prices: extract_sale_prices(html),
        listing_counts: extract_listing_counts(html),
    }
}

/// Strip HTML tags from a fragment and normalize whitespace.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
