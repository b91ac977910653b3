//! Test-hand session: the dealt hand plus what is left of the deck.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{DeckCard, RoleTag};

/// An ephemeral hand/pile pair produced by a shuffle.
///
/// Cards only ever move from the front of `remaining` to the end of `hand`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSession {
    hand: Vec<DeckCard>,
    remaining: Vec<DeckCard>,
}

impl DrawSession {
    #[must_use]
    pub fn new(hand: Vec<DeckCard>, remaining: Vec<DeckCard>) -> Self {
        Self { hand, remaining }
    }

    #[must_use]
    pub fn hand(&self) -> &[DeckCard] {
        &self.hand
    }

    #[must_use]
    pub fn remaining(&self) -> &[DeckCard] {
        &self.remaining
    }

    /// Draw the next card onto the hand.
    ///
    /// Returns `None` without changing anything when the pile is empty.
    pub fn draw_one(&mut self) -> Option<&DeckCard> {
        if self.remaining.is_empty() {
            return None;
        }
        let card = self.remaining.remove(0);
        trace!(instance = %card.instance_id, left = self.remaining.len(), "drew card");
        self.hand.push(card);
        self.hand.last()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Cards in hand carrying a role.
    #[must_use]
    pub fn count_tag(&self, tag: RoleTag) -> usize {
        self.hand.iter().filter(|c| c.has_tag(tag)).count()
    }

    /// Split into `(hand, remaining)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DeckCard>, Vec<DeckCard>) {
        (self.hand, self.remaining)
    }
}
