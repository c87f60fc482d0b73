//! Proxy-routed page fetching with a bounded attempt budget.

use std::sync::Arc;
use std::time::Duration;

use crate::error::IngestError;
use crate::proxy::{proxied_client, ProxyPool};
use crate::retry::{retry_with_delay, RetryPolicy};

/// Fetches listing pages through the proxy pool. Every attempt draws a
/// fresh endpoint and builds a throwaway client for it, so one bad exit
/// cannot pin the whole budget.
pub struct PageFetcher {
    pool: Arc<ProxyPool>,
    policy: RetryPolicy,
    timeout: Duration,
    user_agent: String,
}

impl PageFetcher {
    #[must_use]
    pub fn new(
        pool: Arc<ProxyPool>,
        policy: RetryPolicy,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Self {
        Self {
            pool,
            policy,
            timeout: Duration::from_secs(timeout_secs),
            user_agent: user_agent.to_owned(),
        }
    }

    /// Body text of `url`, or `None` once every attempt has failed.
    ///
    /// Absence is the degraded result, not an error: downstream aggregation
    /// treats a missing page as an empty signal set and the sweep moves on.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        retry_with_delay(self.policy, || async move {
            let endpoint = self.pool.select();
            let client = proxied_client(endpoint, self.timeout, &self.user_agent)?;
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(IngestError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }
            Ok(response.text().await?)
        })
        .await
    }
}
