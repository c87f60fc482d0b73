//! Database operations for the `products` table.

use chrono::{DateTime, NaiveDate, Utc};
use flipsight_core::MarketSummary;
use serde_json::json;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `products` table.
///
/// The enrichment columns are nullable: a freshly seeded product has no
/// observations yet. Each sweep overwrites them wholesale, so they always
/// describe the run recorded in `observed_on`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub avg_sale_price: Option<f64>,
    pub total_listings: Option<i64>,
    pub total_sale_amount: Option<f64>,
    /// Thousands-grouped figure, e.g. `"40,500"`. `"0"` when the source had
    /// no figure for the locale at sweep time.
    pub search_volume_us: Option<String>,
    pub search_volume_au: Option<String>,
    pub search_volume_uk: Option<String>,
    /// JSON array of related search keywords.
    pub keywords: Option<serde_json::Value>,
    pub observed_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// products operations
// ---------------------------------------------------------------------------

/// All products, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_products(pool: &PgPool) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, name, image_url, avg_sale_price, total_listings, \
                total_sale_amount, search_volume_us, search_volume_au, search_volume_uk, \
                keywords, observed_on, created_at, updated_at \
         FROM products \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// A single product by `id`, if one exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_product(pool: &PgPool, id: i64) -> Result<Option<ProductRow>, DbError> {
    let row = sqlx::query_as::<_, ProductRow>(
        "SELECT id, name, image_url, avg_sale_price, total_listings, \
                total_sale_amount, search_volume_us, search_volume_au, search_volume_uk, \
                keywords, observed_on, created_at, updated_at \
         FROM products \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Inserts a product to track and returns its generated `id`. Enrichment
/// columns start `NULL` until the first sweep visits the row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_product(
    pool: &PgPool,
    name: &str,
    image_url: Option<&str>,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (name, image_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(image_url)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Overwrites the enrichment columns of one product with a sweep's summary.
///
/// Returns the number of rows affected: zero means the row vanished between
/// the sweep's read and this write, which callers treat as a skip rather
/// than a failure.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the update fails.
pub async fn update_market_summary(
    pool: &PgPool,
    id: i64,
    summary: &MarketSummary,
) -> Result<u64, DbError> {
    let keywords = json!(summary.keywords);

    let rows_affected = sqlx::query(
        "UPDATE products SET \
             avg_sale_price    = $2, \
             total_listings    = $3, \
             total_sale_amount = $4, \
             search_volume_us  = $5, \
             search_volume_au  = $6, \
             search_volume_uk  = $7, \
             keywords          = $8::jsonb, \
             observed_on       = $9, \
             updated_at        = NOW() \
         WHERE id = $1",
    )
    .bind(id)
    .bind(summary.avg_sale_price)
    .bind(summary.total_listings)
    .bind(summary.total_sale_amount)
    .bind(&summary.demand.us)
    .bind(&summary.demand.au)
    .bind(&summary.demand.uk)
    .bind(keywords)
    .bind(summary.observed_on)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(rows_affected)
}
