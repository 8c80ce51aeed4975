//! Human-readable explanation factors for a trust breakdown.
//!
//! Checks run in a fixed priority order and collection stops at
//! `MAX_FACTORS`; later triggered factors are dropped.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::product::ProductInput;

pub const MAX_FACTORS: usize = 3;

const HIGH: f64 = 80.0;
const RATING_LOW: f64 = 40.0;
const VOLUME_LOW: f64 = 30.0;
const AUTHENTICITY_LOW: f64 = 50.0;

const CONSISTENT_RATING_ABOVE: f64 = 4.0;
const CONSISTENT_COUNT_ABOVE: i64 = 100;
const NEW_PRODUCT_COUNT_BELOW: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustFactor {
    HighSatisfaction,
    BelowAverageRatings,
    ManyReviews,
    LimitedReviewData,
    AuthenticReviews,
    ReviewQualityIssues,
    ConsistentlyPositive,
    NewProduct,
}

impl TrustFactor {
    pub fn message(self) -> &'static str {
        match self {
            TrustFactor::HighSatisfaction => "High customer satisfaction",
            TrustFactor::BelowAverageRatings => "Below average ratings",
            TrustFactor::ManyReviews => "Large number of reviews",
            TrustFactor::LimitedReviewData => "Limited review data",
            TrustFactor::AuthenticReviews => "Reviews appear authentic",
            TrustFactor::ReviewQualityIssues => "Potential review quality issues",
            TrustFactor::ConsistentlyPositive => "Consistently positive feedback",
            TrustFactor::NewProduct => "New product with limited feedback",
        }
    }
}

impl fmt::Display for TrustFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for TrustFactor {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.message())
    }
}

/// Sub-scores the factor rules look at.
#[derive(Debug, Clone, Copy)]
pub struct SubScores {
    pub rating: f64,
    pub volume: f64,
    pub authenticity: f64,
}

fn high_or_low(score: f64, low: f64, hi: TrustFactor, lo: TrustFactor) -> Option<TrustFactor> {
    if score >= HIGH {
        Some(hi)
    } else if score <= low {
        Some(lo)
    } else {
        None
    }
}

pub fn trust_factors(product: &ProductInput, scores: SubScores) -> Vec<TrustFactor> {
    let candidates = [
        high_or_low(
            scores.rating,
            RATING_LOW,
            TrustFactor::HighSatisfaction,
            TrustFactor::BelowAverageRatings,
        ),
        high_or_low(
            scores.volume,
            VOLUME_LOW,
            TrustFactor::ManyReviews,
            TrustFactor::LimitedReviewData,
        ),
        high_or_low(
            scores.authenticity,
            AUTHENTICITY_LOW,
            TrustFactor::AuthenticReviews,
            TrustFactor::ReviewQualityIssues,
        ),
        (product.rating > CONSISTENT_RATING_ABOVE
            && product.review_count > CONSISTENT_COUNT_ABOVE)
            .then_some(TrustFactor::ConsistentlyPositive),
        (product.review_count < NEW_PRODUCT_COUNT_BELOW).then_some(TrustFactor::NewProduct),
    ];

    candidates.into_iter().flatten().take(MAX_FACTORS).collect()
}
