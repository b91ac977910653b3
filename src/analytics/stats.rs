//! Opening-hand statistics for a deck's main zone.

use serde::{Deserialize, Serialize};

use crate::cards::{DeckCard, RoleTag};
use crate::deck::{DeckPartition, DeckZone};
use crate::math::{calculate_probability, expected_successes};

/// Copies of one role and the odds of opening at least one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagOdds {
    pub count: usize,
    /// Percent chance of at least one in the opening hand.
    pub probability: f64,
}

impl TagOdds {
    fn compute(deck_size: usize, count: usize, hand_size: usize) -> Self {
        Self {
            count,
            probability: calculate_probability(deck_size as i64, count as i64, hand_size as i64, 1),
        }
    }
}

/// Headline consistency numbers for a list of cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub deck_size: usize,
    pub hand_size: usize,
    pub starters: TagOdds,
    pub bricks: TagOdds,
    pub defense: TagOdds,
    pub hand_traps: TagOdds,
}

impl DeckStats {
    /// Compute stats for `cards`. `None` for an empty list.
    #[must_use]
    pub fn from_cards<'a>(
        cards: impl IntoIterator<Item = &'a DeckCard>,
        hand_size: usize,
    ) -> Option<Self> {
        let counts = TagCounts::tally(cards);
        if counts.total == 0 {
            return None;
        }

        let odds = |count| TagOdds::compute(counts.total, count, hand_size);
        Some(Self {
            deck_size: counts.total,
            hand_size,
            starters: odds(counts.starters),
            bricks: odds(counts.bricks),
            defense: odds(counts.defense),
            hand_traps: odds(counts.hand_traps),
        })
    }

    /// Stats for the main zone using the deck's opening hand size.
    #[must_use]
    pub fn from_partition(deck: &DeckPartition) -> Option<Self> {
        Self::from_cards(deck.zone(DeckZone::Main), deck.rules().hand_size)
    }
}

/// Expected number of each role in an opening hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AverageHand {
    pub starters: f64,
    pub bricks: f64,
    pub hand_traps: f64,
}

impl AverageHand {
    /// `None` for an empty list.
    #[must_use]
    pub fn from_cards<'a>(
        cards: impl IntoIterator<Item = &'a DeckCard>,
        hand_size: usize,
    ) -> Option<Self> {
        let counts = TagCounts::tally(cards);
        if counts.total == 0 {
            return None;
        }

        let mean = |count: usize| {
            expected_successes(counts.total as i64, count as i64, hand_size as i64)
        };
        Some(Self {
            starters: mean(counts.starters),
            bricks: mean(counts.bricks),
            hand_traps: mean(counts.hand_traps),
        })
    }
}

#[derive(Default)]
struct TagCounts {
    total: usize,
    starters: usize,
    bricks: usize,
    defense: usize,
    hand_traps: usize,
}

impl TagCounts {
    fn tally<'a>(cards: impl IntoIterator<Item = &'a DeckCard>) -> Self {
        let mut counts = Self::default();
        for card in cards {
            counts.total += 1;
            match card.tag {
                Some(RoleTag::Starter) => counts.starters += 1,
                Some(RoleTag::Brick) => counts.bricks += 1,
                Some(RoleTag::Defense) => counts.defense += 1,
                Some(RoleTag::HandTrap) => counts.hand_traps += 1,
                Some(RoleTag::Extender | RoleTag::Engine | RoleTag::Flex) | None => {}
            }
        }
        counts
    }
}
