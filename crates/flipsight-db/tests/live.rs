//! Live integration tests for flipsight-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/flipsight-db/`), so `"../../migrations"` resolves to the
//! workspace migration directory.
//!
//! Run with `cargo test -p flipsight-db -- --ignored` and a reachable
//! `DATABASE_URL`; the tests are skipped in default runs so the rest of the
//! suite stays green without Postgres.

use chrono::NaiveDate;
use flipsight_core::{CatalogReader, CatalogWriter, DemandVolumes, MarketSummary, WriteOutcome};
use flipsight_db::{
    get_product, insert_product, list_products, seed_products, update_market_summary, PgCatalog,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn observation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid calendar date")
}

fn sample_summary() -> MarketSummary {
    MarketSummary {
        avg_sale_price: 64.37,
        total_listings: 1244,
        total_sale_amount: 80_076.28,
        demand: DemandVolumes {
            us: "40,500".to_string(),
            au: "2,900".to_string(),
            uk: "8,100".to_string(),
        },
        keywords: vec![
            "vintage polaroid camera film".to_string(),
            "vintage polaroid camera case".to_string(),
        ],
        observed_on: observation_date(),
    }
}

// ---------------------------------------------------------------------------
// products operations
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn insert_then_get_product(pool: sqlx::PgPool) {
    let id = insert_product(&pool, "vintage polaroid camera", None)
        .await
        .unwrap_or_else(|e| panic!("insert failed: {e}"));

    let row = get_product(&pool, id)
        .await
        .unwrap_or_else(|e| panic!("get failed: {e}"))
        .unwrap_or_else(|| panic!("row {id} missing after insert"));

    assert_eq!(row.name, "vintage polaroid camera");
    assert!(row.avg_sale_price.is_none(), "no sweep has run yet");
    assert!(row.observed_on.is_none());
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn update_market_summary_overwrites_enrichment_columns(pool: sqlx::PgPool) {
    let id = insert_product(&pool, "vintage polaroid camera", None)
        .await
        .unwrap_or_else(|e| panic!("insert failed: {e}"));

    let affected = update_market_summary(&pool, id, &sample_summary())
        .await
        .unwrap_or_else(|e| panic!("update failed: {e}"));
    assert_eq!(affected, 1);

    let row = get_product(&pool, id)
        .await
        .unwrap_or_else(|e| panic!("get failed: {e}"))
        .unwrap_or_else(|| panic!("row {id} missing after update"));

    assert_eq!(row.avg_sale_price, Some(64.37));
    assert_eq!(row.total_listings, Some(1244));
    assert_eq!(row.total_sale_amount, Some(80_076.28));
    assert_eq!(row.search_volume_us.as_deref(), Some("40,500"));
    assert_eq!(row.search_volume_au.as_deref(), Some("2,900"));
    assert_eq!(row.search_volume_uk.as_deref(), Some("8,100"));
    assert_eq!(
        row.keywords,
        Some(serde_json::json!([
            "vintage polaroid camera film",
            "vintage polaroid camera case"
        ]))
    );
    assert_eq!(row.observed_on, Some(observation_date()));
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn update_market_summary_reports_missing_rows(pool: sqlx::PgPool) {
    let affected = update_market_summary(&pool, 999_999, &sample_summary())
        .await
        .unwrap_or_else(|e| panic!("update failed: {e}"));

    assert_eq!(affected, 0);
}

// ---------------------------------------------------------------------------
// seeding
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn seeding_twice_inserts_each_name_once(pool: sqlx::PgPool) {
    let names = ["nintendo switch oled", "pokemon booster box"];

    let first = seed_products(&pool, &names)
        .await
        .unwrap_or_else(|e| panic!("seed failed: {e}"));
    let second = seed_products(&pool, &names)
        .await
        .unwrap_or_else(|e| panic!("reseed failed: {e}"));

    assert_eq!(first, 2);
    assert_eq!(second, 0);

    let rows = list_products(&pool)
        .await
        .unwrap_or_else(|e| panic!("list failed: {e}"));
    assert_eq!(rows.len(), 2);
}

// ---------------------------------------------------------------------------
// catalog traits
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn catalog_lists_targets_in_id_order(pool: sqlx::PgPool) {
    let first = insert_product(&pool, "nintendo switch oled", None)
        .await
        .unwrap_or_else(|e| panic!("insert failed: {e}"));
    let second = insert_product(&pool, "pokemon booster box", None)
        .await
        .unwrap_or_else(|e| panic!("insert failed: {e}"));

    let catalog = PgCatalog::new(pool);
    let targets = catalog
        .list_targets()
        .await
        .unwrap_or_else(|e| panic!("list_targets failed: {e}"));

    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].id, first);
    assert_eq!(targets[0].name, "nintendo switch oled");
    assert_eq!(targets[1].id, second);

    let missing = catalog
        .get_target(second + 1)
        .await
        .unwrap_or_else(|e| panic!("get_target failed: {e}"));
    assert!(missing.is_none());
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn catalog_write_reports_updated_and_not_found(pool: sqlx::PgPool) {
    let id = insert_product(&pool, "air jordan 1 retro high", None)
        .await
        .unwrap_or_else(|e| panic!("insert failed: {e}"));

    let catalog = PgCatalog::new(pool);
    let summary = sample_summary();

    let outcome = catalog
        .update_summary(id, &summary)
        .await
        .unwrap_or_else(|e| panic!("update_summary failed: {e}"));
    assert_eq!(outcome, WriteOutcome::Updated);

    let outcome = catalog
        .update_summary(id + 1, &summary)
        .await
        .unwrap_or_else(|e| panic!("update_summary failed: {e}"));
    assert_eq!(outcome, WriteOutcome::NotFound);
}
