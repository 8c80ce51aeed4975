// tests/trust_properties.rs
//
// Randomized sweeps over the trust engine's documented bounds.
// Seeded so failures are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use recensor::trust::{authenticity_score, rating_score, volume_score, MAX_FACTORS};
use recensor::{score_detailed, score_of, ProductInput};

const TITLES: [&str; 6] = [
    "",
    "Plain kettle",
    "Best budget mop",
    "Amazing magic wand",
    "Incredible revolutionary BEST magic amazing",
    "iPhone 15 - Premium Quality",
];

fn random_input(rng: &mut StdRng, rating_range: (f64, f64), count_range: (i64, i64)) -> ProductInput {
    let rating = rng.random_range(rating_range.0..=rating_range.1);
    let count = rng.random_range(count_range.0..=count_range.1);
    let title = TITLES[rng.random_range(0..TITLES.len())];
    ProductInput::new(rating, count, title)
}

#[test]
fn overall_stays_in_range_for_valid_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5_000 {
        let p = random_input(&mut rng, (0.0, 5.0), (0, 50_000));
        let r = score_detailed(&p);
        assert!(r.overall <= 100, "{p:?} -> {}", r.overall);
        assert!(r.factors.len() <= MAX_FACTORS);
        assert_eq!(score_of(&p), r.overall);
    }
}

#[test]
fn overall_and_authenticity_clamped_for_garbage_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let p = random_input(&mut rng, (-1_000.0, 1_000.0), (-1_000_000, 1_000_000));
        let r = score_detailed(&p);
        assert!(r.overall <= 100);
        assert!((20.0..=100.0).contains(&authenticity_score(&p)));
        assert!(r.factors.len() <= MAX_FACTORS);
    }
}

#[test]
fn rating_sub_score_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5_000 {
        let a: f64 = rng.random_range(0.0..=5.0);
        let b: f64 = rng.random_range(0.0..=5.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(rating_score(lo) <= rating_score(hi) + 1e-9, "{lo} vs {hi}");
    }
}

#[test]
fn volume_sub_score_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..5_000 {
        let a: i64 = rng.random_range(-100..=5_000);
        let b: i64 = rng.random_range(-100..=5_000);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(volume_score(lo) <= volume_score(hi), "{lo} vs {hi}");
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let p = random_input(&mut rng, (0.0, 5.0), (0, 5_000));
        assert_eq!(score_detailed(&p), score_detailed(&p.clone()));
    }
}
