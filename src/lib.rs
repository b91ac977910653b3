//! # deckdojo-engine
//!
//! Deck-consistency engine for trading card game deck builders.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Probability, validation and statistics are side-effect-free
//!    functions over plain values. Nothing here does I/O.
//!
//! 2. **Caller-owned state**: A `DeckPartition` is a value the caller holds
//!    and passes in. The engine keeps no state between calls.
//!
//! 3. **No surprises on bad input**: Out-of-range numbers give zero odds,
//!    illegal decks give a full list of errors. Only deck edits and rule
//!    loading return `Result`.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, banlist status, tagged instances
//! - `core`: Deck rules, errors, shuffle RNG
//! - `deck`: Main/extra/side partition and edit operations
//! - `math`: Binomial coefficients and hypergeometric odds
//! - `simulation`: Fisher-Yates shuffles and test hands
//! - `validation`: Size, copy-limit and advisory checks
//! - `analytics`: Deck statistics and benchmark grading
//!
//! ## Example
//!
//! ```
//! use deckdojo_engine::math::calculate_probability;
//!
//! // Chance to open at least one of 12 starters in 40 cards, 5-card hand.
//! let odds = calculate_probability(40, 12, 5, 1);
//! assert!(odds > 80.0 && odds < 90.0);
//! ```

pub mod analytics;
pub mod cards;
pub mod core;
pub mod deck;
pub mod math;
pub mod simulation;
pub mod validation;

// Re-export commonly used types
pub use crate::cards::{BanStatus, Card, CardCategory, CardId, DeckCard, InstanceId, RoleTag};

pub use crate::core::{DeckError, DeckRules, DrawRng, DrawRngState};

pub use crate::deck::{DeckPartition, DeckZone, SortOrder};

pub use crate::math::{
    calculate_probability, combinations, combinations_exact, copy_sensitivity,
    exact_probability, expected_successes, CopySensitivity, HypergeometricQuery,
};

pub use crate::simulation::{draw_hand, draw_hand_with, DrawSession};

pub use crate::validation::{validate_deck, validate_deck_with, ValidationResult};

pub use crate::analytics::{
    evaluate_stat, AverageHand, DeckStats, Evaluation, StatKind, StatStatus, TagOdds,
};
