//! Card instances - individual copies inside a deck.
//!
//! `DeckCard` represents one physical copy of a card. Copies of the same
//! `CardId` are distinct instances and may carry different role tags.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};

/// Unique identifier for a card instance.
///
/// Allocated by `DeckPartition` and never reused within a partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Strategic role a player assigns to a card.
///
/// Closed set: adding a role is a deliberate change that every `match`
/// over this type has to acknowledge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleTag {
    /// Opens a combo on its own.
    Starter,
    /// Continues a combo after a starter resolves.
    Extender,
    /// Dead draw in the opening hand.
    Brick,
    Engine,
    Flex,
    Defense,
    HandTrap,
}

impl RoleTag {
    /// Every role, in display order.
    pub const ALL: [RoleTag; 7] = [
        RoleTag::Starter,
        RoleTag::Extender,
        RoleTag::Brick,
        RoleTag::Engine,
        RoleTag::Flex,
        RoleTag::Defense,
        RoleTag::HandTrap,
    ];

    /// Wire label (`"starter"`, `"hand-trap"`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Extender => "extender",
            Self::Brick => "brick",
            Self::Engine => "engine",
            Self::Flex => "flex",
            Self::Defense => "defense",
            Self::HandTrap => "hand-trap",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.label() == label)
    }
}

impl std::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card copy held in a deck, with its instance identity and role tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    /// Unique identity of this copy.
    pub instance_id: InstanceId,

    /// The card this is a copy of.
    pub card: Card,

    /// User-assigned role. `None` for untagged copies.
    #[serde(default)]
    pub tag: Option<RoleTag>,
}

impl DeckCard {
    /// Create an untagged instance.
    #[must_use]
    pub fn new(instance_id: InstanceId, card: Card) -> Self {
        Self {
            instance_id,
            card,
            tag: None,
        }
    }

    /// Set the role tag (builder pattern).
    #[must_use]
    pub fn tagged(mut self, tag: RoleTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// The card definition ID of this copy.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    /// Check whether this copy carries the given role.
    #[must_use]
    pub fn has_tag(&self, tag: RoleTag) -> bool {
        self.tag == Some(tag)
    }
}
