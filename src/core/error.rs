//! Errors for deck edits and rule loading.
//!
//! The probability engine and the validator never fail; only the editing
//! operations on `DeckPartition` and configuration loading return these.

use thiserror::Error;

use crate::cards::{CardId, InstanceId};
use crate::deck::DeckZone;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("{zone} is full ({max} cards)")]
    ZoneFull { zone: DeckZone, max: usize },

    #[error("{card} already has {max} copies in the deck")]
    CopyLimitReached { card: CardId, max: usize },

    #[error("{0} not found")]
    InstanceNotFound(InstanceId),

    #[error("invalid deck rules: {0}")]
    InvalidRules(String),

    #[error("failed to parse deck rules: {0}")]
    Config(#[from] serde_json::Error),
}
