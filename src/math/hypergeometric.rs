//! Hypergeometric opening-hand odds.
//!
//! Answers "what is the chance of seeing at least `k` of my `K` starters
//! in an `n`-card hand from an `N`-card deck?". Results are percentages in
//! `[0, 100]`. Out-of-domain inputs yield `0.0` rather than an error.

use serde::{Deserialize, Serialize};

use super::combinatorics::combinations;

/// Probability, in percent, of drawing at least `desired` successes.
///
/// - `population` (N): cards in the deck
/// - `successes` (K): cards that count as a hit
/// - `sample` (n): cards drawn
/// - `desired` (k): minimum hits wanted
///
/// Computed as `1 - P(X < k)`, which for the common `k = 1` case is a
/// single term. Returns `0.0` when `N <= 0`, `n <= 0`, `K <= 0`, `k > n`
/// or `k > K`, and clamps the result into `[0, 100]`.
///
/// ```
/// use deckdojo_engine::math::calculate_probability;
///
/// // 10 starters in 40 cards, at least one in a 5-card hand.
/// let p = calculate_probability(40, 10, 5, 1);
/// assert!((p - 78.34).abs() < 0.01);
/// ```
#[must_use]
pub fn calculate_probability(population: i64, successes: i64, sample: i64, desired: i64) -> f64 {
    if population <= 0 || sample <= 0 || successes <= 0 {
        return 0.0;
    }
    if desired > sample || desired > successes {
        return 0.0;
    }

    let total_ways = combinations(population, sample);
    if total_ways == 0.0 {
        return 0.0;
    }

    let prob_below: f64 = (0..desired)
        .map(|i| {
            combinations(successes, i) * combinations(population - successes, sample - i)
                / total_ways
        })
        .sum();

    ((1.0 - prob_below) * 100.0).clamp(0.0, 100.0)
}

/// Probability, as a fraction in `[0, 1]`, of drawing exactly `hits` successes.
///
/// Returns `0.0` for any input outside the distribution's support.
#[must_use]
pub fn exact_probability(population: i64, successes: i64, sample: i64, hits: i64) -> f64 {
    if population <= 0 || sample < 0 || successes < 0 || successes > population {
        return 0.0;
    }
    let total_ways = combinations(population, sample);
    if total_ways == 0.0 {
        return 0.0;
    }
    let ways = combinations(successes, hits) * combinations(population - successes, sample - hits);
    (ways / total_ways).clamp(0.0, 1.0)
}

/// Mean number of successes in the sample: `n * K / N`.
#[must_use]
pub fn expected_successes(population: i64, successes: i64, sample: i64) -> f64 {
    if population <= 0 {
        return 0.0;
    }
    sample as f64 * successes as f64 / population as f64
}

/// A complete hypergeometric question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HypergeometricQuery {
    pub population: i64,
    pub successes: i64,
    pub sample: i64,
    pub desired: i64,
}

impl HypergeometricQuery {
    /// "At least one of `successes` in an opening hand of `sample`."
    #[must_use]
    pub const fn at_least_one(population: i64, successes: i64, sample: i64) -> Self {
        Self {
            population,
            successes,
            sample,
            desired: 1,
        }
    }

    /// Percentage chance of at least `desired` successes.
    #[must_use]
    pub fn probability(&self) -> f64 {
        calculate_probability(self.population, self.successes, self.sample, self.desired)
    }

    /// How the odds move if one success is added or removed.
    #[must_use]
    pub fn sensitivity(&self) -> CopySensitivity {
        copy_sensitivity(self.population, self.successes, self.sample, self.desired)
    }
}

/// Marginal impact of one more or one fewer copy of a success card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CopySensitivity {
    /// Odds for the deck as is.
    pub base: f64,
    /// Odds with one more success (deck grows by one).
    pub add_one: f64,
    /// Odds with one fewer success (deck shrinks by one). `None` with no successes.
    pub remove_one: Option<f64>,
}

impl CopySensitivity {
    /// Percentage points gained by adding a copy.
    #[must_use]
    pub fn add_delta(&self) -> f64 {
        self.add_one - self.base
    }

    /// Percentage points lost (negative) by removing a copy.
    #[must_use]
    pub fn remove_delta(&self) -> Option<f64> {
        self.remove_one.map(|p| p - self.base)
    }
}

/// Odds for the deck as is, with one copy added, and with one copy removed.
#[must_use]
pub fn copy_sensitivity(
    population: i64,
    successes: i64,
    sample: i64,
    desired: i64,
) -> CopySensitivity {
    let base = calculate_probability(population, successes, sample, desired);
    // Counts at the edge of i64 have no neighbour; treat them as zero odds.
    let add_one = match (population.checked_add(1), successes.checked_add(1)) {
        (Some(population), Some(successes)) => {
            calculate_probability(population, successes, sample, desired)
        }
        _ => 0.0,
    };
    let remove_one = (successes > 0).then(|| {
        population.checked_sub(1).map_or(0.0, |population| {
            calculate_probability(population, successes - 1, sample, desired)
        })
    });

    CopySensitivity {
        base,
        add_one,
        remove_one,
    }
}
