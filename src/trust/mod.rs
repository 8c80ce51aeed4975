// src/trust/mod.rs
//! Trust sub-score building blocks: band tables, authenticity, factors and labels.

pub mod authenticity;
pub mod bands;
pub mod factors;
pub mod label;

pub use authenticity::{authenticity_score, spam_keyword_count};
pub use bands::{rating_score, sentiment_score, volume_score};
pub use factors::{trust_factors, SubScores, TrustFactor, MAX_FACTORS};
pub use label::TrustLabel;

/// Composite weights; they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub rating: f64,
    pub volume: f64,
    pub authenticity: f64,
    pub sentiment: f64,
}

pub const WEIGHTS: Weights = Weights {
    rating: 0.30,
    volume: 0.25,
    authenticity: 0.25,
    sentiment: 0.20,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHTS.rating + WEIGHTS.volume + WEIGHTS.authenticity + WEIGHTS.sentiment;
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
