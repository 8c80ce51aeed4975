//! # Trust Engine
//! Pure, testable logic that maps a `ProductInput` → `TrustScoreResult`.
//! No I/O and no shared state; safe to call from any number of tasks.
//!
//! Policy: four independent sub-scores (rating, volume, authenticity,
//! sentiment) blended with fixed weights, rounded and clamped to 0..=100,
//! plus up to three explanation factors.
//!
//! Inputs are not validated. Only `overall` and `authenticity` are clamped;
//! the other sub-scores follow the arithmetic for out-of-range inputs.

use serde::Serialize;

use crate::product::ProductInput;
use crate::trust::{
    authenticity_score, rating_score, sentiment_score, trust_factors, volume_score, SubScores,
    TrustFactor, WEIGHTS,
};

/// Full breakdown for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustScoreResult {
    pub overall: u8,
    pub rating: f64,
    pub volume: f64,
    pub authenticity: f64,
    pub sentiment: f64,
    pub factors: Vec<TrustFactor>,
}

/// Overall score only.
pub fn score_of(product: &ProductInput) -> u8 {
    score_detailed(product).overall
}

pub fn score_detailed(product: &ProductInput) -> TrustScoreResult {
    let rating = rating_score(product.rating);
    let volume = volume_score(product.review_count);
    let authenticity = authenticity_score(product);
    let sentiment = sentiment_score(product.rating);

    let blended = rating * WEIGHTS.rating
        + volume * WEIGHTS.volume
        + authenticity * WEIGHTS.authenticity
        + sentiment * WEIGHTS.sentiment;

    let factors = trust_factors(
        product,
        SubScores {
            rating,
            volume,
            authenticity,
        },
    );

    TrustScoreResult {
        overall: clamp_overall(blended),
        rating,
        volume,
        authenticity,
        sentiment,
        factors,
    }
}

/// Round half away from zero, clamp to 0..=100. NaN saturates to 0.
fn clamp_overall(blended: f64) -> u8 {
    blended.round().clamp(0.0, 100.0) as u8
}
