//! Deck analytics built on the probability engine.
//!
//! - `DeckStats`: counts and opening odds for starters, bricks, defense, hand traps
//! - `AverageHand`: expected copies of each role in an opening hand
//! - `evaluate_stat`: grades odds against competitive benchmarks

pub mod benchmarks;
pub mod stats;

pub use benchmarks::{evaluate_stat, Evaluation, StatKind, StatStatus};
pub use stats::{AverageHand, DeckStats, TagOdds};
