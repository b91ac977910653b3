//! Ambient engine types: rules configuration, errors, randomness.

pub mod config;
pub mod error;
pub mod rng;

pub use config::DeckRules;
pub use error::DeckError;
pub use rng::{DrawRng, DrawRngState};
