//! sentiment.rs — Placeholder review analysis.
//!
//! Neither function feeds the composite trust score. `text_sentiment` is a
//! word-list heuristic and `fake_review_score` a fixed constant until real
//! review analysis exists.

use crate::product::Review;

pub const POSITIVE_WORDS: [&str; 5] = ["good", "great", "excellent", "amazing", "love"];
pub const NEGATIVE_WORDS: [&str; 5] = ["bad", "terrible", "awful", "hate", "worst"];

const NEUTRAL: f64 = 0.5;
const POSITIVE_BASE: f64 = 0.7;
const NEGATIVE_BASE: f64 = 0.3;
const STEP: f64 = 0.1;

/// Share of reviews assumed authentic.
pub const FAKE_REVIEW_PLACEHOLDER: f64 = 0.85;

/// Always `FAKE_REVIEW_PLACEHOLDER`; the reviews are not inspected.
pub fn fake_review_score(_reviews: &[Review]) -> f64 {
    FAKE_REVIEW_PLACEHOLDER
}

/// Counts distinct list words present as substrings of `text`.
fn hits(text: &str, words: &[&str]) -> i32 {
    words.iter().filter(|w| text.contains(*w)).count() as i32
}

/// Case-insensitive word-list sentiment; 0.5 is neutral.
///
/// Not clamped: four or five net hits leave `0.0..=1.0` (up to 1.2, down to -0.2).
pub fn text_sentiment(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let pos = hits(&lower, &POSITIVE_WORDS);
    let neg = hits(&lower, &NEGATIVE_WORDS);

    match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => POSITIVE_BASE + f64::from(pos - neg) * STEP,
        std::cmp::Ordering::Less => NEGATIVE_BASE - f64::from(neg - pos) * STEP,
        std::cmp::Ordering::Equal => NEUTRAL,
    }
}
