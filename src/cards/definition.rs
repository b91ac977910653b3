//! Card definitions - static card data.
//!
//! `Card` holds the immutable catalog properties of a card: its name,
//! type line, ranking attributes and banlist status. These come from an
//! external catalog and are never modified by the engine.
//!
//! Deck-specific data (instance identity, role tag) is stored separately
//! in `DeckCard`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the card itself (e.g., "Ash Blossom"), not a specific
/// copy inside a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Tournament restriction level of a card.
///
/// A card without a status is treated as `Unlimited`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BanStatus {
    Unlimited,
    #[serde(rename = "Semi-Limited")]
    SemiLimited,
    Limited,
    Banned,
}

impl BanStatus {
    /// Maximum copies allowed across main, extra and side decks combined.
    #[must_use]
    pub const fn copy_limit(self) -> usize {
        match self {
            Self::Banned => 0,
            Self::Limited => 1,
            Self::SemiLimited => 2,
            Self::Unlimited => 3,
        }
    }

    /// Canonical label as printed on banlists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unlimited => "Unlimited",
            Self::SemiLimited => "Semi-Limited",
            Self::Limited => "Limited",
            Self::Banned => "Banned",
        }
    }

    /// Parse a banlist label. Unknown labels yield `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Unlimited" => Some(Self::Unlimited),
            "Semi-Limited" => Some(Self::SemiLimited),
            "Limited" => Some(Self::Limited),
            "Banned" => Some(Self::Banned),
            _ => None,
        }
    }
}

impl std::fmt::Display for BanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Broad category derived from a card's type line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Monster,
    Spell,
    Trap,
    /// Tokens, skills and anything else the type line doesn't classify.
    Other,
}

const EXTRA_DECK_MARKERS: [&str; 4] = ["Fusion", "Synchro", "XYZ", "Link"];

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckdojo_engine::cards::{BanStatus, Card, CardCategory, CardId};
///
/// let ash = Card::new(CardId::new(14558127), "Ash Blossom & Joyous Spring", "Tuner Effect Monster")
///     .with_level(3)
///     .with_ban_status(BanStatus::Unlimited);
///
/// assert_eq!(ash.category(), CardCategory::Monster);
/// assert_eq!(ash.copy_limit(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display and error messages).
    pub name: String,

    /// Type line, e.g. "Effect Monster", "Spell Card", "Link Monster".
    #[serde(rename = "type")]
    pub card_type: String,

    /// Level or rank.
    #[serde(default)]
    pub level: Option<u8>,

    /// Pendulum scale.
    #[serde(default)]
    pub scale: Option<u8>,

    /// Link rating.
    #[serde(default, rename = "linkval")]
    pub link_value: Option<u8>,

    /// Catalog archetype. Carried so card JSON round-trips; no check reads it.
    #[serde(default)]
    pub archetype: Option<String>,

    /// Banlist status. `None` behaves as `Unlimited`.
    #[serde(default)]
    pub ban_status: Option<BanStatus>,
}

impl Card {
    /// Create a new card definition with no ranking attributes.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            level: None,
            scale: None,
            link_value: None,
            archetype: None,
            ban_status: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_link_value(mut self, link_value: u8) -> Self {
        self.link_value = Some(link_value);
        self
    }

    #[must_use]
    pub fn with_ban_status(mut self, status: BanStatus) -> Self {
        self.ban_status = Some(status);
        self
    }

    /// Effective banlist status, treating a missing status as `Unlimited`.
    #[must_use]
    pub fn status(&self) -> BanStatus {
        self.ban_status.unwrap_or(BanStatus::Unlimited)
    }

    /// Maximum legal copies of this card in a deck.
    #[must_use]
    pub fn copy_limit(&self) -> usize {
        self.status().copy_limit()
    }

    /// Classify the type line.
    #[must_use]
    pub fn category(&self) -> CardCategory {
        if self.card_type.contains("Monster") {
            CardCategory::Monster
        } else if self.card_type.contains("Spell") {
            CardCategory::Spell
        } else if self.card_type.contains("Trap") {
            CardCategory::Trap
        } else {
            CardCategory::Other
        }
    }

    /// Whether this card belongs in the extra deck (Fusion, Synchro, XYZ, Link).
    #[must_use]
    pub fn is_extra_deck(&self) -> bool {
        self.category() == CardCategory::Monster
            && EXTRA_DECK_MARKERS
                .iter()
                .any(|marker| self.card_type.contains(marker))
    }

    /// Level, else scale, else link rating, else 0. Used for ordering monsters.
    #[must_use]
    pub fn sort_rank(&self) -> u8 {
        self.level
            .filter(|&v| v > 0)
            .or(self.scale.filter(|&v| v > 0))
            .or(self.link_value)
            .unwrap_or(0)
    }
}
