//! Authenticity sub-score: review volume bonuses, title spam words and a
//! "too perfect" penalty. Keyword containment only; no statistical analysis.

use crate::product::ProductInput;

pub const BASE: f64 = 70.0;
pub const MIN: f64 = 20.0;
pub const MAX: f64 = 100.0;

/// `(review count strictly above, bonus)`; bonuses stack.
const VOLUME_BONUSES: [(i64, f64); 2] = [(100, 10.0), (500, 5.0)];

pub const SPAM_KEYWORDS: [&str; 5] = ["best", "amazing", "incredible", "revolutionary", "magic"];

/// `(min distinct spam words, penalty)`, first match wins.
const SPAM_PENALTIES: [(usize, f64); 2] = [(3, 20.0), (2, 10.0)];

const PERFECT_RATING_ABOVE: f64 = 4.8;
const THIN_EVIDENCE_BELOW: i64 = 50;
const PERFECT_RATING_PENALTY: f64 = 15.0;

/// Number of distinct spam keywords contained anywhere in `title` (case-insensitive).
pub fn spam_keyword_count(title: &str) -> usize {
    let lower = title.to_lowercase();
    SPAM_KEYWORDS.iter().filter(|k| lower.contains(*k)).count()
}

pub fn authenticity_score(product: &ProductInput) -> f64 {
    let mut score = BASE;

    for (above, bonus) in VOLUME_BONUSES {
        if product.review_count > above {
            score += bonus;
        }
    }

    let spam = spam_keyword_count(&product.title);
    if let Some((_, penalty)) = SPAM_PENALTIES.iter().find(|(min, _)| spam >= *min) {
        score -= penalty;
    }

    if product.rating > PERFECT_RATING_ABOVE && product.review_count < THIN_EVIDENCE_BELOW {
        score -= PERFECT_RATING_PENALTY;
    }

    score.clamp(MIN, MAX)
}
