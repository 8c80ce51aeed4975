// src/api.rs
//! HTTP surface: product search with trust scores, direct scoring endpoints,
//! the placeholder analysis endpoints and the static UI.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::debug;

use crate::config::AppConfig;
use crate::debug::dev_log_search;
use crate::engine::{score_detailed, score_of, TrustScoreResult};
use crate::error::{ApiError, ApiResult};
use crate::metrics::{self, Metrics};
use crate::product::{ProductInput, Review};
use crate::search::{search_and_score, ProductSource, ScoredProduct};
use crate::sentiment::{fake_review_score, text_sentiment};
use crate::trust::TrustLabel;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub source: Arc<dyn ProductSource>,
}

impl AppState {
    pub fn new(config: AppConfig, source: Arc<dyn ProductSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}

pub fn create_router(state: AppState, metrics: Option<&Metrics>) -> Router {
    let ui = ServeDir::new(&state.config.ui.dir);

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search))
        .route("/popular", get(popular))
        .route("/trust/score", post(trust_score))
        .route("/trust/detailed", post(trust_detailed))
        .route("/trust/batch", post(trust_batch))
        .route("/analyze/sentiment", post(analyze_sentiment))
        .route("/analyze/fake-reviews", post(analyze_fake_reviews))
        .with_state(state);

    if let Some(m) = metrics {
        router = router.merge(m.router());
    }

    router
        .fallback_service(ui)
        .layer(CorsLayer::very_permissive())
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    count: usize,
    products: Vec<ScoredProduct>,
}

/// Trimmed query, or an error for blank / oversized input.
fn validate_query(raw: Option<&str>, max_len: usize) -> ApiResult<String> {
    let q = raw.unwrap_or_default().trim();
    if q.is_empty() {
        return Err(ApiError::EmptyQuery);
    }
    let len = q.chars().count();
    if len > max_len {
        return Err(ApiError::QueryTooLong { len, max: max_len });
    }
    Ok(q.to_string())
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let query = validate_query(params.q.as_deref(), state.config.search.max_query_len)?;
    metrics::record_search();

    let products = search_and_score(state.source.as_ref(), &query).await;
    let scores: Vec<u8> = products.iter().map(|p| p.trust_score).collect();
    for s in &scores {
        metrics::record_scored(*s);
    }
    dev_log_search(&query, &scores);

    Ok(Json(SearchResponse {
        count: products.len(),
        query,
        products,
    }))
}

async fn popular(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.config.search.popular.clone())
}

#[derive(Debug, Serialize)]
struct ScoreOut {
    overall: u8,
    label: TrustLabel,
}

async fn trust_score(Json(product): Json<ProductInput>) -> Json<ScoreOut> {
    let overall = score_of(&product);
    metrics::record_scored(overall);
    Json(ScoreOut {
        overall,
        label: TrustLabel::from_score(overall),
    })
}

#[derive(Debug, Serialize)]
struct DetailedOut {
    #[serde(flatten)]
    result: TrustScoreResult,
    label: TrustLabel,
}

async fn trust_detailed(Json(product): Json<ProductInput>) -> Json<DetailedOut> {
    let result = score_detailed(&product);
    metrics::record_scored(result.overall);
    Json(DetailedOut {
        label: TrustLabel::from_score(result.overall),
        result,
    })
}

async fn trust_batch(Json(products): Json<Vec<ProductInput>>) -> Json<Vec<TrustScoreResult>> {
    debug!(target: "api", count = products.len(), "batch trust scoring");
    let out = products
        .iter()
        .map(|p| {
            let r = score_detailed(p);
            metrics::record_scored(r.overall);
            r
        })
        .collect();
    Json(out)
}

#[derive(Debug, Deserialize)]
struct SentimentReq {
    text: String,
}

#[derive(Debug, Serialize)]
struct SentimentResp {
    score: f64,
}

async fn analyze_sentiment(Json(body): Json<SentimentReq>) -> Json<SentimentResp> {
    Json(SentimentResp {
        score: text_sentiment(&body.text),
    })
}

#[derive(Debug, Deserialize)]
struct FakeReviewsReq {
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
struct FakeReviewsResp {
    authentic: f64,
}

async fn analyze_fake_reviews(Json(body): Json<FakeReviewsReq>) -> Json<FakeReviewsResp> {
    Json(FakeReviewsResp {
        authentic: fake_review_score(&body.reviews),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        assert_eq!(validate_query(Some("  Lamp "), 10).unwrap(), "Lamp");
    }

    #[test]
    fn blank_or_missing_query_rejected() {
        assert!(matches!(validate_query(None, 10), Err(ApiError::EmptyQuery)));
        assert!(matches!(
            validate_query(Some("   "), 10),
            Err(ApiError::EmptyQuery)
        ));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(validate_query(Some("čččč"), 4).is_ok());
        assert!(matches!(
            validate_query(Some("ččččč"), 4),
            Err(ApiError::QueryTooLong { len: 5, max: 4 })
        ));
    }
}
