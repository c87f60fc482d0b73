use sqlx::PgPool;

use crate::DbError;

/// Starter products for a fresh deployment, resale staples with steady
/// sold-listing traffic.
pub const DEMO_PRODUCTS: &[&str] = &[
    "nintendo switch oled",
    "lego star wars millennium falcon",
    "vintage polaroid camera",
    "air jordan 1 retro high",
    "pokemon booster box",
];

/// Insert tracked products by name, skipping names that already exist.
///
/// Returns the number of rows actually inserted, so running the seed twice
/// reports zero the second time. All inserts run inside a single
/// transaction; if any operation fails the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_products(pool: &PgPool, names: &[&str]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0usize;

    for name in names {
        let rows_affected = sqlx::query(
            "INSERT INTO products (name) \
             SELECT $1 \
             WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)",
        )
        .bind(name)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        inserted += usize::try_from(rows_affected).unwrap_or(0);
    }

    tx.commit().await?;
    Ok(inserted)
}
