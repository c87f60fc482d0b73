//! Marketplace ingestion engine: proxy-routed fetching with a bounded retry
//! budget, tolerant parsing of listing pages into numeric signals, regional
//! demand and keyword-suggestion lookups, aggregation into per-target
//! summaries, and the cadence that re-runs the whole pass.

pub mod aggregate;
pub mod demand;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod proxy;
pub mod retry;
pub mod runner;
pub mod scheduler;
pub mod suggest;
pub mod urls;

pub use demand::DemandClient;
pub use error::IngestError;
pub use fetch::PageFetcher;
pub use parse::parse_listing_page;
pub use proxy::{ProxyEndpoint, ProxyPool};
pub use retry::RetryPolicy;
pub use runner::SweepRunner;
pub use suggest::SuggestionClient;
