//! Deck sort orders.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{CardCategory, DeckCard};

/// How to order the cards of each zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep insertion order.
    #[default]
    Default,
    /// Monsters, then spells, then traps; monsters by descending level.
    MonsterSpellTrap,
    /// By name.
    Alphabetical,
}

impl SortOrder {
    /// Compare two cards under this order.
    #[must_use]
    pub fn compare(self, a: &DeckCard, b: &DeckCard) -> Ordering {
        match self {
            Self::Default => Ordering::Equal,
            Self::Alphabetical => compare_names(a, b),
            Self::MonsterSpellTrap => {
                let pa = type_priority(a);
                let pb = type_priority(b);
                pa.cmp(&pb)
                    .then_with(|| {
                        if pa == 1 {
                            b.card.sort_rank().cmp(&a.card.sort_rank())
                        } else {
                            Ordering::Equal
                        }
                    })
                    .then_with(|| compare_names(a, b))
            }
        }
    }
}

fn type_priority(card: &DeckCard) -> u8 {
    if card.card.card_type.is_empty() {
        return 99;
    }
    match card.card.category() {
        CardCategory::Monster => 1,
        CardCategory::Spell => 2,
        CardCategory::Trap => 3,
        CardCategory::Other => 4,
    }
}

// Case-insensitive first so "ash" and "Ash" sit together.
fn compare_names(a: &DeckCard, b: &DeckCard) -> Ordering {
    a.card
        .name
        .to_lowercase()
        .cmp(&b.card.name.to_lowercase())
        .then_with(|| a.card.name.cmp(&b.card.name))
}
