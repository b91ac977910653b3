//! Deck legality validation.
//!
//! `validate_deck` checks zone sizes, per-card copy limits across all
//! three zones (driven by each card's banlist status) and a couple of
//! advisory heuristics. It is pure and never fails: every violation is
//! reported in the returned `ValidationResult`.

pub mod result;
pub mod validator;

pub use result::ValidationResult;
pub use validator::{validate_deck, validate_deck_with};
