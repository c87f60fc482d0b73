//! Regional search-volume lookups.

use std::sync::Arc;
use std::time::Duration;

use flipsight_core::Locale;

use crate::error::IngestError;
use crate::proxy::{proxied_client, ProxyPool};
use crate::retry::{retry_with_delay, RetryPolicy};
use crate::urls;

/// Client for the search-volume API. Requests route through the proxy pool
/// with the same per-attempt client construction as page fetching, on a
/// shorter inter-attempt pause.
pub struct DemandClient {
    pool: Arc<ProxyPool>,
    policy: RetryPolicy,
    timeout: Duration,
    base_url: String,
    user_agent: String,
}

impl DemandClient {
    #[must_use]
    pub fn new(
        pool: Arc<ProxyPool>,
        policy: RetryPolicy,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Self {
        Self {
            pool,
            policy,
            timeout: Duration::from_secs(timeout_secs),
            base_url: base_url.to_owned(),
            user_agent: user_agent.to_owned(),
        }
    }

    /// Formatted monthly volume for `keywords` in `locale` (e.g. `"40,500"`),
    /// or `None` once the attempt budget is spent.
    ///
    /// Callers substitute `"0"` for absence, so one blocked locale can never
    /// take a whole summary down.
    pub async fn volume(&self, keywords: &str, locale: Locale) -> Option<String> {
        let url = urls::volume_url(&self.base_url, keywords, locale);
        retry_with_delay(self.policy, || {
            let url = url.clone();
            async move {
                let endpoint = self.pool.select();
                let client = proxied_client(endpoint, self.timeout, &self.user_agent)?;
                let response = client.get(&url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(IngestError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let payload: serde_json::Value =
                    serde_json::from_str(&body).map_err(|e| IngestError::Deserialize {
                        context: format!("search volume ({locale})"),
                        source: e,
                    })?;
                let volume =
                    first_volume(&payload).ok_or(IngestError::MissingVolume { url })?;
                Ok(format_grouped(volume))
            }
        })
        .await
    }
}

/// First value of the response object, accepted when it is an integer or an
/// integral float. The API keys the payload by the queried term, so the
/// first (and in practice only) entry is the figure of interest.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn first_volume(payload: &serde_json::Value) -> Option<u64> {
    let (_, value) = payload.as_object()?.iter().next()?;
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= 9_007_199_254_740_992.0 {
        Some(f as u64)
    } else {
        None
    }
}

/// Thousands-separated rendering: `40500` becomes `"40,500"`.
fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
