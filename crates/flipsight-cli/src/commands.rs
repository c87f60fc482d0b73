//! Command handlers. Each one builds just enough of the pipeline for the
//! job at hand; only `run` keeps the process alive.

use std::sync::Arc;
use std::time::Duration;

use flipsight_core::{AppConfig, CatalogReader, CatalogWriter};
use flipsight_db::PgCatalog;
use flipsight_ingest::{
    scheduler, DemandClient, PageFetcher, ProxyPool, RetryPolicy, SuggestionClient, SweepRunner,
};

/// Enrichment service: migrate, sweep immediately, then sweep on the
/// configured cadence until the process receives a shutdown signal.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let applied = flipsight_db::run_migrations(&pool).await?;
    if applied > 0 {
        tracing::info!(applied, "applied pending migrations");
    }

    let runner = Arc::new(build_runner(config, pool)?);
    let mut scheduler =
        scheduler::start(runner, Duration::from_secs(config.sweep_interval_secs)).await?;

    shutdown_signal().await;
    scheduler.shutdown().await?;
    Ok(())
}

/// One sweep over the whole catalog; prints the summaries as JSON.
pub async fn sweep(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let runner = build_runner(config, pool)?;

    let summaries = runner.sweep().await?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

/// Enrich one tracked product and print its summary as JSON.
pub async fn target(config: &AppConfig, id: i64) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let runner = build_runner(config, pool)?;

    let Some(summary) = runner.sweep_target(id).await? else {
        anyhow::bail!("no tracked product with id {id}");
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub async fn db_ping(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    flipsight_db::ping(&pool).await?;
    println!("database ok");
    Ok(())
}

pub async fn db_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let applied = flipsight_db::run_migrations(&pool).await?;
    println!("{applied} migration(s) applied");
    Ok(())
}

pub async fn db_seed(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let inserted = flipsight_db::seed_products(&pool, flipsight_db::DEMO_PRODUCTS).await?;
    println!("{inserted} product(s) inserted");
    Ok(())
}

async fn connect(config: &AppConfig) -> Result<sqlx::PgPool, sqlx::Error> {
    let pool_config = flipsight_db::PoolConfig::from_app_config(config);
    flipsight_db::connect_pool(&config.database_url, pool_config).await
}

/// Wires every pipeline component to the shared proxy pool and the Postgres
/// catalog. The same runner serves one-shot sweeps and the scheduler.
fn build_runner(config: &AppConfig, pool: sqlx::PgPool) -> anyhow::Result<SweepRunner> {
    let catalog = Arc::new(PgCatalog::new(pool));
    let proxies = Arc::new(ProxyPool::from_config(config));

    let fetcher = PageFetcher::new(
        Arc::clone(&proxies),
        RetryPolicy::new(config.fetch_attempts, config.fetch_retry_delay_secs),
        config.request_timeout_secs,
        &config.user_agent,
    );
    let demand = DemandClient::new(
        proxies,
        RetryPolicy::new(config.demand_attempts, config.demand_retry_delay_secs),
        config.request_timeout_secs,
        &config.demand_base_url,
        &config.user_agent,
    );
    let suggest = SuggestionClient::new(
        config.request_timeout_secs,
        &config.suggest_base_url,
        &config.user_agent,
    )?;

    Ok(SweepRunner::new(
        fetcher,
        demand,
        suggest,
        Arc::clone(&catalog) as Arc<dyn CatalogReader>,
        catalog as Arc<dyn CatalogWriter>,
        &config.marketplace_base_url,
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
