//! Validation outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Outcome of validating a deck.
///
/// `is_valid` is true exactly when `errors` is empty. Warnings are
/// advisory and never affect validity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,

    /// Blocking problems, in check order.
    pub errors: Vec<String>,

    /// Advisory issues, in check order.
    pub warnings: Vec<String>,

    /// Cards implicated in at least one error, in first-seen order.
    /// SmallVec: a typical illegal deck has only a handful.
    pub errored_card_ids: SmallVec<[CardId; 4]>,
}

impl ValidationResult {
    pub(crate) fn from_parts(
        errors: Vec<String>,
        warnings: Vec<String>,
        errored_card_ids: SmallVec<[CardId; 4]>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            errored_card_ids,
        }
    }

    /// Check whether a card should be highlighted as illegal.
    #[must_use]
    pub fn is_card_errored(&self, card: CardId) -> bool {
        self.errored_card_ids.contains(&card)
    }
}
