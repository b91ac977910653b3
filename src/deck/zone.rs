//! The three deck zones.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One of the three disjoint collections making up a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckZone {
    Main,
    Extra,
    Side,
}

impl DeckZone {
    /// All zones in canonical order.
    pub const ALL: [DeckZone; 3] = [DeckZone::Main, DeckZone::Extra, DeckZone::Side];

    /// Display name used in messages ("Main Deck", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Main Deck",
            Self::Extra => "Extra Deck",
            Self::Side => "Side Deck",
        }
    }

    /// Where a card is played from: Extra for Fusion/Synchro/XYZ/Link
    /// monsters, Main for everything else.
    #[must_use]
    pub fn home_of(card: &Card) -> Self {
        if card.is_extra_deck() {
            Self::Extra
        } else {
            Self::Main
        }
    }
}

impl std::fmt::Display for DeckZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_names() {
        assert_eq!(DeckZone::Main.to_string(), "Main Deck");
        assert_eq!(DeckZone::Extra.to_string(), "Extra Deck");
        assert_eq!(DeckZone::Side.to_string(), "Side Deck");
    }

    #[test]
    fn test_home_zone() {
        use crate::cards::CardId;

        let link = Card::new(CardId::new(1), "Link", "Link Monster");
        let trap = Card::new(CardId::new(2), "Trap", "Trap Card");
        assert_eq!(DeckZone::home_of(&link), DeckZone::Extra);
        assert_eq!(DeckZone::home_of(&trap), DeckZone::Main);
    }

    #[test]
    fn test_zone_serde() {
        assert_eq!(serde_json::to_string(&DeckZone::Side).unwrap(), "\"side\"");
        let zone: DeckZone = serde_json::from_str("\"extra\"").unwrap();
        assert_eq!(zone, DeckZone::Extra);
    }
}
