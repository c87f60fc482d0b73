//! Shared foundation for the flipsight workspace: environment-driven
//! configuration, the domain types that flow through the ingestion pipeline,
//! and the two narrow traits the pipeline uses to talk to catalog storage.

use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use catalog::{CatalogError, CatalogReader, CatalogWriter, WriteOutcome};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{DemandVolumes, ListingSignals, Locale, MarketSummary, ScrapeTarget};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
