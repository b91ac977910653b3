//! Probability engine tests on deck-building scenarios.

use deckdojo_engine::math::{
    calculate_probability, combinations, exact_probability, HypergeometricQuery,
};

const TOLERANCE: f64 = 0.01;

// =============================================================================
// Opening Hand Scenarios
// =============================================================================

#[test]
fn test_ten_starters_forty_cards() {
    let p = calculate_probability(40, 10, 5, 1);
    assert!((p - 78.34).abs() < TOLERANCE, "got {p}");
}

#[test]
fn test_three_of_a_staple() {
    let p = calculate_probability(40, 3, 5, 1);
    assert!((p - 33.76).abs() < TOLERANCE, "got {p}");
}

#[test]
fn test_going_second_draws_six() {
    let p = calculate_probability(40, 10, 6, 1);
    assert!((p - 84.53).abs() < TOLERANCE, "got {p}");
}

#[test]
fn test_bigger_deck_lowers_odds() {
    let forty = calculate_probability(40, 12, 5, 1);
    let sixty = calculate_probability(60, 12, 5, 1);
    assert!(sixty < forty);
}

#[test]
fn test_at_least_k_decreases_with_k() {
    let odds: Vec<f64> = (1..=5).map(|k| calculate_probability(40, 15, 5, k)).collect();
    assert!(odds.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_complement_matches_direct_tail_sum() {
    for k in 1..=5 {
        let tail: f64 = (k..=5).map(|i| exact_probability(40, 10, 5, i)).sum();
        let p = calculate_probability(40, 10, 5, k);
        assert!((p - tail * 100.0).abs() < 1e-9, "k={k}");
    }
}

// =============================================================================
// Numeric Robustness
// =============================================================================

#[test]
fn test_large_population_stays_finite() {
    assert!(combinations(300, 150).is_finite());
    let p = calculate_probability(300, 30, 7, 2);
    assert!((0.0..=100.0).contains(&p));
}

#[test]
fn test_query_at_least_one() {
    let q = HypergeometricQuery::at_least_one(40, 9, 5);
    assert_eq!(q.desired, 1);
    assert_eq!(q.probability(), calculate_probability(40, 9, 5, 1));

    let json = serde_json::to_string(&q).unwrap();
    let back: HypergeometricQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(q, back);
}
