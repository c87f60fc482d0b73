//! Postgres-backed implementation of the catalog traits the ingestion
//! pipeline runs against.

use async_trait::async_trait;
use flipsight_core::{
    CatalogError, CatalogReader, CatalogWriter, MarketSummary, ScrapeTarget, WriteOutcome,
};
use sqlx::PgPool;

use crate::products;

/// Catalog over the `products` table. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PgCatalog {
    async fn list_targets(&self) -> Result<Vec<ScrapeTarget>, CatalogError> {
        let rows = products::list_products(&self.pool)
            .await
            .map_err(CatalogError::backend)?;
        Ok(rows
            .into_iter()
            .map(|row| ScrapeTarget {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn get_target(&self, id: i64) -> Result<Option<ScrapeTarget>, CatalogError> {
        let row = products::get_product(&self.pool, id)
            .await
            .map_err(CatalogError::backend)?;
        Ok(row.map(|row| ScrapeTarget {
            id: row.id,
            name: row.name,
        }))
    }
}

#[async_trait]
impl CatalogWriter for PgCatalog {
    async fn update_summary(
        &self,
        id: i64,
        summary: &MarketSummary,
    ) -> Result<WriteOutcome, CatalogError> {
        let rows_affected = products::update_market_summary(&self.pool, id, summary)
            .await
            .map_err(CatalogError::backend)?;
        if rows_affected == 0 {
            Ok(WriteOutcome::NotFound)
        } else {
            Ok(WriteOutcome::Updated)
        }
    }
}
