//! Binomial coefficients without factorials.
//!
//! `combinations` is the floating-point workhorse used by the probability
//! engine. `combinations_exact` runs the same recurrence in checked integer
//! arithmetic for callers that need bit-exact results.

/// Number of `k`-subsets of an `n`-set, as `f64`.
///
/// Returns `0.0` when `k < 0` or `k > n` and `1.0` when `k == 0` or
/// `k == n`. Uses the running product `r = r * (n - i + 1) / i`, so at
/// most `min(k, n - k)` multiply/divide steps and no overflow for deck
/// sized inputs. Large `n` may carry small rounding error.
///
/// ```
/// use deckdojo_engine::math::combinations;
///
/// assert_eq!(combinations(40, 5), 658_008.0);
/// assert_eq!(combinations(5, 7), 0.0);
/// ```
#[must_use]
pub fn combinations(n: i64, k: i64) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let k = k.min(n - k);
    let mut result = 1.0_f64;
    for i in 1..=k {
        result = result * (n - i + 1) as f64 / i as f64;
    }
    result
}

/// Exact binomial coefficient, or `None` if an intermediate product
/// overflows `u128`.
///
/// After step `i` the running product equals `C(n, i)`, so every division
/// is exact.
#[must_use]
pub fn combinations_exact(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=u128::from(k) {
        result = result.checked_mul(u128::from(n) - i + 1)? / i;
    }
    Some(result)
}
