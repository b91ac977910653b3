//! Deck partition: main, extra and side zones.
//!
//! `DeckPartition` is a caller-owned value. The engine reads it for
//! validation and statistics and offers edit operations that mutate it in
//! place. Zones are `im::Vector`s, so cloning a partition to keep an
//! earlier snapshot is O(1).
//!
//! Edits enforce zone capacity and the editor's copy cap. Banlist limits
//! are deliberately not enforced here; the validator reports them.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sort::SortOrder;
use super::zone::DeckZone;
use crate::cards::{Card, CardId, DeckCard, InstanceId, RoleTag};
use crate::core::{DeckError, DeckRules};

/// The three zones of a deck plus the rules governing edits.
///
/// ## Usage
///
/// ```
/// use deckdojo_engine::cards::{Card, CardId, RoleTag};
/// use deckdojo_engine::deck::{DeckPartition, DeckZone};
///
/// let mut deck = DeckPartition::new();
/// let ash = Card::new(CardId::new(1), "Ash Blossom", "Tuner Effect Monster");
///
/// let id = deck.add_card(&ash, DeckZone::Main).unwrap();
/// deck.set_tag(id, Some(RoleTag::HandTrap)).unwrap();
///
/// assert_eq!(deck.len_of(DeckZone::Main), 1);
/// assert_eq!(deck.count_tag(DeckZone::Main, RoleTag::HandTrap), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredPartition")]
pub struct DeckPartition {
    main: Vector<DeckCard>,
    extra: Vector<DeckCard>,
    side: Vector<DeckCard>,

    rules: DeckRules,

    /// Next instance id to allocate. Only grows.
    next_instance: u64,

    /// Edited since the last load, clear or `mark_clean`.
    dirty: bool,
}

/// Serialized form accepted on load. The instance counter and dirty flag
/// are rebuilt from the zones rather than trusted.
#[derive(Deserialize)]
struct StoredPartition {
    #[serde(default)]
    main: Vec<DeckCard>,
    #[serde(default)]
    extra: Vec<DeckCard>,
    #[serde(default)]
    side: Vec<DeckCard>,
    #[serde(default)]
    rules: DeckRules,
}

impl From<StoredPartition> for DeckPartition {
    fn from(stored: StoredPartition) -> Self {
        let mut deck = Self::from_zones(stored.main, stored.extra, stored.side);
        deck.rules = stored.rules;
        deck
    }
}

impl DeckPartition {
    /// Create an empty deck with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck with custom rules.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Load a deck from existing zones.
    ///
    /// Instance ids must already be unique across all three zones. New
    /// instances are allocated above the highest id present.
    #[must_use]
    pub fn from_zones(
        main: impl IntoIterator<Item = DeckCard>,
        extra: impl IntoIterator<Item = DeckCard>,
        side: impl IntoIterator<Item = DeckCard>,
    ) -> Self {
        let mut deck = Self {
            main: main.into_iter().collect(),
            extra: extra.into_iter().collect(),
            side: side.into_iter().collect(),
            ..Self::default()
        };
        deck.next_instance = deck
            .iter_all()
            .map(|c| c.instance_id.raw() + 1)
            .max()
            .unwrap_or(0);
        deck
    }

    /// Replace the rules, e.g. after `from_zones`. Existing cards are kept
    /// even if they exceed the new bounds.
    pub fn set_rules(&mut self, rules: DeckRules) {
        self.rules = rules;
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn zone(&self, zone: DeckZone) -> &Vector<DeckCard> {
        match zone {
            DeckZone::Main => &self.main,
            DeckZone::Extra => &self.extra,
            DeckZone::Side => &self.side,
        }
    }

    fn zone_mut(&mut self, zone: DeckZone) -> &mut Vector<DeckCard> {
        match zone {
            DeckZone::Main => &mut self.main,
            DeckZone::Extra => &mut self.extra,
            DeckZone::Side => &mut self.side,
        }
    }

    /// Copy a zone into a contiguous `Vec`, e.g. for `draw_hand`.
    #[must_use]
    pub fn to_vec(&self, zone: DeckZone) -> Vec<DeckCard> {
        self.zone(zone).iter().cloned().collect()
    }

    #[must_use]
    pub fn len_of(&self, zone: DeckZone) -> usize {
        self.zone(zone).len()
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }

    /// Iterate every instance: main, then extra, then side.
    pub fn iter_all(&self) -> impl Iterator<Item = &DeckCard> + '_ {
        self.main.iter().chain(self.extra.iter()).chain(self.side.iter())
    }

    /// Copies of a card across all zones.
    #[must_use]
    pub fn copies_of(&self, card: CardId) -> usize {
        self.iter_all().filter(|c| c.card_id() == card).count()
    }

    /// Instances in a zone carrying a role.
    #[must_use]
    pub fn count_tag(&self, zone: DeckZone, tag: RoleTag) -> usize {
        self.zone(zone).iter().filter(|c| c.has_tag(tag)).count()
    }

    /// Locate an instance.
    #[must_use]
    pub fn find(&self, instance: InstanceId) -> Option<(DeckZone, &DeckCard)> {
        DeckZone::ALL.into_iter().find_map(|zone| {
            self.zone(zone)
                .iter()
                .find(|c| c.instance_id == instance)
                .map(|c| (zone, c))
        })
    }

    fn position(&self, zone: DeckZone, instance: InstanceId) -> Option<usize> {
        self.zone(zone).iter().position(|c| c.instance_id == instance)
    }

    fn ensure_room(&self, zone: DeckZone) -> Result<(), DeckError> {
        let max = self.rules.max_for(zone);
        if self.len_of(zone) >= max {
            debug!(%zone, max, "zone full, rejecting card");
            return Err(DeckError::ZoneFull { zone, max });
        }
        Ok(())
    }

    /// Add an untagged copy of `card` to the end of `zone`.
    ///
    /// Returns the new instance id.
    pub fn add_card(&mut self, card: &Card, zone: DeckZone) -> Result<InstanceId, DeckError> {
        self.ensure_room(zone)?;

        let max = self.rules.max_copies;
        if self.copies_of(card.id) >= max {
            debug!(card = %card.id, max, "copy cap reached, rejecting card");
            return Err(DeckError::CopyLimitReached { card: card.id, max });
        }

        let instance_id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        self.zone_mut(zone)
            .push_back(DeckCard::new(instance_id, card.clone()));
        self.dirty = true;
        Ok(instance_id)
    }

    /// Remove an instance from `zone`.
    pub fn remove_card(
        &mut self,
        instance: InstanceId,
        zone: DeckZone,
    ) -> Result<DeckCard, DeckError> {
        let index = self
            .position(zone, instance)
            .ok_or(DeckError::InstanceNotFound(instance))?;
        let removed = self.zone_mut(zone).remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Move an instance to the end of another zone.
    ///
    /// Moving within the same zone is a no-op.
    pub fn move_card(
        &mut self,
        instance: InstanceId,
        from: DeckZone,
        to: DeckZone,
    ) -> Result<(), DeckError> {
        let index = self
            .position(from, instance)
            .ok_or(DeckError::InstanceNotFound(instance))?;
        if from == to {
            return Ok(());
        }
        self.ensure_room(to)?;

        let card = self.zone_mut(from).remove(index);
        self.zone_mut(to).push_back(card);
        self.dirty = true;
        Ok(())
    }

    /// Move a side-deck instance back to the zone it is played from.
    ///
    /// Returns the destination zone.
    pub fn return_from_side(&mut self, instance: InstanceId) -> Result<DeckZone, DeckError> {
        let home = self
            .zone(DeckZone::Side)
            .iter()
            .find(|c| c.instance_id == instance)
            .map(|c| DeckZone::home_of(&c.card))
            .ok_or(DeckError::InstanceNotFound(instance))?;
        self.move_card(instance, DeckZone::Side, home)?;
        Ok(home)
    }

    /// Set or clear the role of a single instance.
    pub fn set_tag(&mut self, instance: InstanceId, tag: Option<RoleTag>) -> Result<(), DeckError> {
        let (zone, _) = self
            .find(instance)
            .ok_or(DeckError::InstanceNotFound(instance))?;
        for card in self.zone_mut(zone).iter_mut() {
            if card.instance_id == instance {
                card.tag = tag;
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Set or clear the role of every copy of the instance's card.
    ///
    /// Returns the number of instances retagged.
    pub fn tag_all_copies(
        &mut self,
        instance: InstanceId,
        tag: Option<RoleTag>,
    ) -> Result<usize, DeckError> {
        let card_id = self
            .find(instance)
            .map(|(_, c)| c.card_id())
            .ok_or(DeckError::InstanceNotFound(instance))?;

        let mut retagged = 0;
        for zone in DeckZone::ALL {
            for card in self.zone_mut(zone).iter_mut() {
                if card.card_id() == card_id {
                    card.tag = tag;
                    retagged += 1;
                }
            }
        }
        self.dirty = true;
        Ok(retagged)
    }

    /// Stable-sort every zone.
    pub fn sort(&mut self, order: SortOrder) {
        for zone in DeckZone::ALL {
            let mut cards = self.to_vec(zone);
            cards.sort_by(|a, b| order.compare(a, b));
            *self.zone_mut(zone) = cards.into_iter().collect();
        }
        self.dirty = true;
    }

    /// Empty all zones. The instance counter keeps growing so ids are never reused.
    pub fn clear(&mut self) {
        self.main.clear();
        self.extra.clear();
        self.side.clear();
        self.dirty = false;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
