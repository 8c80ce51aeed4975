//! Band tables for the rating, volume and sentiment sub-scores.
//!
//! Every table is ordered by descending threshold and the first matching row
//! wins. Values below the last row fall through to the table's fallback.

/// Linear band: `floor + (x - threshold) * slope` for `x >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBand {
    pub threshold: f64,
    pub floor: f64,
    pub slope: f64,
}

impl LinearBand {
    const fn new(threshold: f64, floor: f64, slope: f64) -> Self {
        Self {
            threshold,
            floor,
            slope,
        }
    }

    fn apply(&self, x: f64) -> f64 {
        self.floor + (x - self.threshold) * self.slope
    }
}

/// Remaps a 1–5 star rating onto 0–100.
pub const RATING_BANDS: [LinearBand; 5] = [
    LinearBand::new(4.5, 90.0, 20.0),
    LinearBand::new(4.0, 75.0, 30.0),
    LinearBand::new(3.5, 60.0, 30.0),
    LinearBand::new(3.0, 40.0, 40.0),
    LinearBand::new(2.0, 20.0, 20.0),
];

/// Below 2.0 the rating is simply scaled by 10 (negative ratings included).
pub const RATING_FALLBACK: LinearBand = LinearBand::new(0.0, 0.0, 10.0);

/// `(min review count, score)` plateaux.
pub const VOLUME_STEPS: [(i64, f64); 8] = [
    (1000, 95.0),
    (500, 85.0),
    (100, 75.0),
    (50, 65.0),
    (20, 55.0),
    (10, 45.0),
    (5, 35.0),
    (1, 25.0),
];

pub const VOLUME_FALLBACK: f64 = 0.0;

/// `(min rating, score)`; rating stands in for review-text sentiment.
pub const SENTIMENT_BANDS: [(f64, f64); 5] = [
    (4.5, 85.0),
    (4.0, 75.0),
    (3.5, 65.0),
    (3.0, 55.0),
    (2.5, 45.0),
];

pub const SENTIMENT_FALLBACK: f64 = 30.0;

pub fn rating_score(rating: f64) -> f64 {
    RATING_BANDS
        .iter()
        .find(|b| rating >= b.threshold)
        .unwrap_or(&RATING_FALLBACK)
        .apply(rating)
}

pub fn volume_score(review_count: i64) -> f64 {
    VOLUME_STEPS
        .iter()
        .find(|(min, _)| review_count >= *min)
        .map_or(VOLUME_FALLBACK, |(_, score)| *score)
}

/// Placeholder: derived from rating alone, no text analysis.
pub fn sentiment_score(rating: f64) -> f64 {
    SENTIMENT_BANDS
        .iter()
        .find(|(min, _)| rating >= *min)
        .map_or(SENTIMENT_FALLBACK, |(_, score)| *score)
}
