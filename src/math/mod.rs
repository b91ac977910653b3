//! Deck-consistency math: binomial coefficients and hypergeometric odds.
//!
//! Everything here is a pure function over plain integers. Invalid
//! requests (negative sizes, more hits than cards) return zero instead of
//! failing, so callers can feed raw UI state straight in.

pub mod combinatorics;
pub mod hypergeometric;

pub use combinatorics::{combinations, combinations_exact};
pub use hypergeometric::{
    calculate_probability, copy_sensitivity, exact_probability, expected_successes,
    CopySensitivity, HypergeometricQuery,
};
