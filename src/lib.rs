// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod config;
pub mod debug;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod product;
pub mod search;
pub mod sentiment;
pub mod trust;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::engine::{score_detailed, score_of, TrustScoreResult};
pub use crate::product::{Product, ProductInput, Review};
pub use crate::sentiment::{fake_review_score, text_sentiment};
pub use crate::trust::{TrustFactor, TrustLabel};

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::search::MockProductSource;

/// Build the full in-process app from an explicit config.
/// `/metrics` is mounted only when `server.debug_routes` is set.
pub fn app_with_config(config: AppConfig) -> anyhow::Result<Router> {
    let metrics = if config.server.debug_routes {
        Some(Metrics::init(config.search.max_query_len)?)
    } else {
        None
    };
    let state = AppState::new(config, Arc::new(MockProductSource::new()));
    info!(metrics = metrics.is_some(), "router built");
    Ok(create_router(state, metrics.as_ref()))
}

/// Build the app from `AppConfig::load()` (env + config file).
pub fn app() -> anyhow::Result<Router> {
    app_with_config(AppConfig::load()?)
}
