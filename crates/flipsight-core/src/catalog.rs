//! Storage seams for the ingestion pipeline. The engine reads targets and
//! writes summaries through these two traits and never sees the backing
//! store directly.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{MarketSummary, ScrapeTarget};

/// Error surfaced by a catalog backend. The pipeline treats the backend as
/// opaque; concrete stores wrap their own error types via [`CatalogError::backend`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog backend: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(source))
    }
}

/// Outcome of persisting a summary. A row that vanished between listing and
/// writing is a per-target skip, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Updated,
    NotFound,
}

#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All targets eligible for a sweep, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the backend cannot be read.
    async fn list_targets(&self) -> Result<Vec<ScrapeTarget>, CatalogError>;

    /// A single target by id, `None` if no such row exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the backend cannot be read.
    async fn get_target(&self, id: i64) -> Result<Option<ScrapeTarget>, CatalogError>;
}

#[async_trait]
pub trait CatalogWriter: Send + Sync {
    /// Overwrite the stored summary fields for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] only for backend failures; a missing row is
    /// reported as [`WriteOutcome::NotFound`].
    async fn update_summary(
        &self,
        id: i64,
        summary: &MarketSummary,
    ) -> Result<WriteOutcome, CatalogError>;
}
