//! Sequential sweep over the catalog. One target at a time, and every
//! degrade path stays local to the target it happened on: a dead page, a
//! blocked locale, or a vanished row never aborts the pass.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use flipsight_core::{
    CatalogError, CatalogReader, CatalogWriter, DemandVolumes, ListingSignals, Locale,
    MarketSummary, ScrapeTarget, WriteOutcome,
};

use crate::aggregate;
use crate::demand::DemandClient;
use crate::fetch::PageFetcher;
use crate::parse;
use crate::suggest::SuggestionClient;
use crate::urls;

/// Drives one enrichment pass: fetch, parse, demand, suggestions,
/// aggregate, write. Collaborators are built once and shared across
/// targets; each summary is persisted as soon as it exists, so partial
/// sweep progress is durable.
pub struct SweepRunner {
    fetcher: PageFetcher,
    demand: DemandClient,
    suggest: SuggestionClient,
    reader: Arc<dyn CatalogReader>,
    writer: Arc<dyn CatalogWriter>,
    marketplace_base_url: String,
}

impl SweepRunner {
    #[must_use]
    pub fn new(
        fetcher: PageFetcher,
        demand: DemandClient,
        suggest: SuggestionClient,
        reader: Arc<dyn CatalogReader>,
        writer: Arc<dyn CatalogWriter>,
        marketplace_base_url: &str,
    ) -> Self {
        Self {
            fetcher,
            demand,
            suggest,
            reader,
            writer,
            marketplace_base_url: marketplace_base_url.to_owned(),
        }
    }

    /// Enriches every catalog target in order and returns the summary
    /// computed for each, keyed by target id. Entries appear for every
    /// visited target whether or not its write succeeded; the map is the
    /// observability record of the run.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] only when the target list itself cannot be
    /// read; everything after that is per-target and non-fatal.
    pub async fn sweep(&self) -> Result<BTreeMap<i64, MarketSummary>, CatalogError> {
        let targets = self.reader.list_targets().await?;
        let observed_on = Utc::now().date_naive();
        tracing::info!(targets = targets.len(), %observed_on, "sweep started");

        let mut summaries = BTreeMap::new();
        for target in targets {
            let summary = self.enrich_target(&target, observed_on).await;
            self.write_summary(&target, &summary).await;
            summaries.insert(target.id, summary);
        }

        tracing::info!(targets = summaries.len(), "sweep finished");
        Ok(summaries)
    }

    /// Enriches a single target by id, outside the normal cadence. Returns
    /// `Ok(None)` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the target cannot be looked up.
    pub async fn sweep_target(&self, id: i64) -> Result<Option<MarketSummary>, CatalogError> {
        let Some(target) = self.reader.get_target(id).await? else {
            tracing::warn!(target_id = id, "no such target; nothing to enrich");
            return Ok(None);
        };
        let observed_on = Utc::now().date_naive();
        let summary = self.enrich_target(&target, observed_on).await;
        self.write_summary(&target, &summary).await;
        Ok(Some(summary))
    }

    /// Full pipeline for one target. Infallible by construction: every
    /// upstream failure lands on a default and the summary always exists.
    async fn enrich_target(&self, target: &ScrapeTarget, observed_on: NaiveDate) -> MarketSummary {
        let url = urls::search_url(&self.marketplace_base_url, &target.name);
        tracing::info!(target_id = target.id, name = %target.name, "enriching target");

        let signals = match self.fetcher.fetch_page(&url).await {
            Some(html) => parse::parse_listing_page(&html),
            None => {
                tracing::warn!(
                    target_id = target.id,
                    "listing page unavailable; continuing with empty signals"
                );
                ListingSignals::default()
            }
        };

        let mut demand = DemandVolumes::zeroed();
        for locale in Locale::ALL {
            if let Some(volume) = self.demand.volume(&target.name, locale).await {
                demand.set(locale, volume);
            } else {
                tracing::warn!(
                    target_id = target.id,
                    %locale,
                    "demand lookup exhausted; keeping \"0\""
                );
            }
        }

        let keywords = self.suggest.related_keywords(&target.name).await;

        aggregate::summarize(&signals, demand, keywords, observed_on)
    }

    /// Persists one summary, keeping write trouble local to the target.
    async fn write_summary(&self, target: &ScrapeTarget, summary: &MarketSummary) {
        match self.writer.update_summary(target.id, summary).await {
            Ok(WriteOutcome::Updated) => {
                tracing::info!(
                    target_id = target.id,
                    avg_sale_price = summary.avg_sale_price,
                    total_listings = summary.total_listings,
                    "summary stored"
                );
            }
            Ok(WriteOutcome::NotFound) => {
                tracing::warn!(target_id = target.id, "target vanished before write; skipping");
            }
            Err(err) => {
                tracing::error!(target_id = target.id, error = %err, "failed to store summary");
            }
        }
    }
}
