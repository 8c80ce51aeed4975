// src/search.rs
//! Product search: a pluggable `ProductSource` plus the fetch-all-then-score
//! pipeline used by `/search`.
//!
//! Only a mock source exists; it returns three fixed records built around the
//! query. A failing source is treated as "no results".

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::{score_detailed, TrustScoreResult};
use crate::product::{Product, ProductInput};
use crate::trust::TrustLabel;

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/300";

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>>;
}

/// Fixed mock catalogue; ignores everything about the query except its text.
#[derive(Debug, Clone, Default)]
pub struct MockProductSource;

impl MockProductSource {
    pub fn new() -> Self {
        Self
    }

    pub fn products_for(query: &str) -> Vec<Product> {
        [
            ("1", format!("{query} - Premium Quality"), "$29.99", 4.3, 1247),
            ("2", format!("Best {query} for Budget"), "$19.99", 3.8, 892),
            ("3", format!("Professional {query} Kit"), "$89.99", 4.7, 2156),
        ]
        .into_iter()
        .map(|(id, title, price, rating, review_count)| Product {
            id: id.to_string(),
            title,
            price: price.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            rating,
            review_count,
            url: "#".to_string(),
        })
        .collect()
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<Product>> {
        Ok(Self::products_for(query))
    }
}

/// Product annotated with its trust breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub trust_score: u8,
    pub label: TrustLabel,
    pub trust: TrustScoreResult,
}

impl ScoredProduct {
    pub fn score(product: Product) -> Self {
        let trust = score_detailed(&ProductInput::from(&product));
        Self {
            trust_score: trust.overall,
            label: TrustLabel::from_score(trust.overall),
            trust,
            product,
        }
    }
}

/// Waits for the full result set, then scores every record.
pub async fn search_and_score(source: &dyn ProductSource, query: &str) -> Vec<ScoredProduct> {
    let products = match source.search(query).await {
        Ok(p) => p,
        Err(e) => {
            warn!(target: "search", error = %e, "product source failed; returning no results");
            return Vec::new();
        }
    };

    let scored: Vec<ScoredProduct> = products.into_iter().map(ScoredProduct::score).collect();
    debug!(target: "search", count = scored.len(), "scored search results");
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait]
    impl ProductSource for FailingSource {
        async fn search(&self, _query: &str) -> anyhow::Result<Vec<Product>> {
            anyhow::bail!("upstream unavailable")
        }
    }

    #[test]
    fn mock_titles_embed_query() {
        let p = MockProductSource::products_for("AirPods");
        let titles: Vec<&str> = p.iter().map(|x| x.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AirPods - Premium Quality",
                "Best AirPods for Budget",
                "Professional AirPods Kit"
            ]
        );
        assert!(p.iter().all(|x| x.image == PLACEHOLDER_IMAGE && x.url == "#"));
    }

    #[tokio::test]
    async fn scores_every_mock_record() {
        let out = search_and_score(&MockProductSource::new(), "iPhone 15").await;
        let scores: Vec<u8> = out.iter().map(|s| s.trust_score).collect();
        assert_eq!(scores, vec![85, 76, 90]);
        assert_eq!(out[0].label, TrustLabel::High);
        assert_eq!(out[1].label, TrustLabel::Medium);
        assert!(out.iter().all(|s| s.trust.overall == s.trust_score));
    }

    #[tokio::test]
    async fn failing_source_yields_empty_list() {
        let out = search_and_score(&FailingSource, "anything").await;
        assert!(out.is_empty());
    }

    #[test]
    fn scored_product_flattens_fields() {
        let p = MockProductSource::products_for("Lamp").remove(0);
        let v = serde_json::to_value(ScoredProduct::score(p)).unwrap();
        assert_eq!(v["title"], "Lamp - Premium Quality");
        assert_eq!(v["reviewCount"], 1247);
        assert_eq!(v["trustScore"], 85);
        assert_eq!(v["label"], "High Trust");
        assert_eq!(v["trust"]["volume"], 95.0);
    }
}
