//! Query URL construction for the three upstream sources.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use flipsight_core::Locale;

/// Sold-and-completed listings search for `keywords`.
///
/// The query string mirrors the marketplace's own "sold items" filter:
/// `LH_Sold`/`LH_Complete` restrict results to finished sales and `_udlo=0`
/// drops the minimum-price floor.
#[must_use]
pub fn search_url(base: &str, keywords: &str) -> String {
    let encoded = utf8_percent_encode(keywords, NON_ALPHANUMERIC).to_string();
    let base = base.trim_end_matches('/');
    format!(
        "{base}/sch/i.html?_from=R40&_nkw={encoded}&_sacat=0&LH_Sold=1&LH_Complete=1&_udlo=0&rt=nc"
    )
}

/// Monthly search volume lookup for `keywords` in `locale`.
#[must_use]
pub fn volume_url(base: &str, keywords: &str, locale: Locale) -> String {
    let encoded = utf8_percent_encode(keywords, NON_ALPHANUMERIC).to_string();
    let base = base.trim_end_matches('/');
    let country = locale.code();
    format!("{base}/search_volume?country={country}&keywords={encoded}")
}

/// Toolbar suggestion feed for `keyword`.
#[must_use]
pub fn suggest_url(base: &str, keyword: &str) -> String {
    let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string();
    let base = base.trim_end_matches('/');
    format!("{base}/complete/search?hl=en&output=toolbar&q={encoded}")
}
