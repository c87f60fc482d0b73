//! Offline unit tests for flipsight-db pool configuration and row types.
//! These tests do not require a live database connection.

use flipsight_core::AppConfig;
use flipsight_db::{PoolConfig, ProductRow, DEMO_PRODUCTS};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        log_level: "info".to_string(),
        proxy_username: "user".to_string(),
        proxy_password: "pass".to_string(),
        proxy_host: "198.51.100.7".to_string(),
        proxy_port: "8080".to_string(),
        marketplace_base_url: "https://www.ebay.com".to_string(),
        demand_base_url: "https://api.searchvolume.com".to_string(),
        suggest_base_url: "https://clients1.google.com".to_string(),
        user_agent: "ua".to_string(),
        request_timeout_secs: 10,
        fetch_attempts: 3,
        fetch_retry_delay_secs: 7,
        demand_attempts: 3,
        demand_retry_delay_secs: 5,
        sweep_interval_secs: 3600,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`ProductRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn product_row_has_expected_fields() {
    use chrono::{NaiveDate, Utc};

    let row = ProductRow {
        id: 42_i64,
        name: "vintage polaroid camera".to_string(),
        image_url: None,
        avg_sale_price: Some(64.37),
        total_listings: Some(1244),
        total_sale_amount: Some(80_076.28),
        search_volume_us: Some("40,500".to_string()),
        search_volume_au: Some("2,900".to_string()),
        search_volume_uk: Some("8,100".to_string()),
        keywords: Some(serde_json::json!(["vintage polaroid camera film"])),
        observed_on: NaiveDate::from_ymd_opt(2026, 3, 14),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    assert_eq!(row.id, 42);
    assert_eq!(row.name, "vintage polaroid camera");
    assert!(row.image_url.is_none());
    assert_eq!(row.total_listings, Some(1244));
    assert_eq!(row.search_volume_us.as_deref(), Some("40,500"));
    assert_eq!(row.observed_on, NaiveDate::from_ymd_opt(2026, 3, 14));
}

#[test]
fn demo_products_are_distinct() {
    let mut names: Vec<&str> = DEMO_PRODUCTS.to_vec();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), DEMO_PRODUCTS.len());
    assert!(!DEMO_PRODUCTS.is_empty());
}
