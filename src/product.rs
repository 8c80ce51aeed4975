//! product.rs — Records flowing between the product source, the trust engine and the API.
//!
//! `ProductInput` is what the engine consumes. It is deliberately permissive:
//! no range checks, a signed review count and a defaulted title, so that
//! malformed records score instead of failing.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input shape for trust scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Star rating, expected in `0.0..=5.0` (not enforced).
    pub rating: f64,
    /// Number of reviews. Signed on purpose: negative counts flow through.
    #[serde(deserialize_with = "review_count")]
    pub review_count: i64,
    /// Only used for case-insensitive keyword scanning.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl ProductInput {
    pub fn new(rating: f64, review_count: i64, title: impl Into<String>) -> Self {
        Self {
            rating,
            review_count,
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A single customer review. Carried for future analysis; unused by the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helpful: Option<u32>,
}

/// Search hit as returned by a `ProductSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Display price, e.g. "$29.99".
    pub price: String,
    pub image: String,
    pub rating: f64,
    #[serde(deserialize_with = "review_count")]
    pub review_count: i64,
    pub url: String,
}

/// Accepts any JSON integer or a whole-number float (`12.0`).
/// Fractional counts are rejected: truncating would move them across the
/// strict `> 100` / `< 10` thresholds.
fn review_count<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number of reviews")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 {
                // saturating cast outside the i64 range
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    d.deserialize_any(CountVisitor)
}

impl From<&Product> for ProductInput {
    /// Same projection the search page used: rating, count and title only.
    fn from(p: &Product) -> Self {
        ProductInput::new(p.rating, p.review_count, p.title.clone())
    }
}
