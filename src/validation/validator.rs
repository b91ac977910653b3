//! Deck legality checks.
//!
//! Checks run in a fixed order (sizes, copy limits, advisories) so the
//! same deck always yields the same messages in the same order.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::result::ValidationResult;
use crate::cards::{Card, CardId, RoleTag};
use crate::core::DeckRules;
use crate::deck::{DeckPartition, DeckZone};
use crate::math::calculate_probability;

/// Validate a deck against its own rules.
///
/// ```
/// use deckdojo_engine::deck::DeckPartition;
/// use deckdojo_engine::validation::validate_deck;
///
/// let result = validate_deck(&DeckPartition::new());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors, vec!["Main Deck too small (0/40)"]);
/// ```
#[must_use]
pub fn validate_deck(deck: &DeckPartition) -> ValidationResult {
    validate_deck_with(deck, deck.rules())
}

/// Validate a deck against explicit rules.
#[must_use]
pub fn validate_deck_with(deck: &DeckPartition, rules: &DeckRules) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut errored_card_ids = SmallVec::new();

    check_sizes(deck, rules, &mut errors);
    check_copy_limits(deck, &mut errors, &mut errored_card_ids);
    check_advisories(deck, rules, &mut warnings);

    debug!(
        main = deck.len_of(DeckZone::Main),
        extra = deck.len_of(DeckZone::Extra),
        side = deck.len_of(DeckZone::Side),
        errors = errors.len(),
        warnings = warnings.len(),
        "validated deck"
    );
    ValidationResult::from_parts(errors, warnings, errored_card_ids)
}

fn check_sizes(deck: &DeckPartition, rules: &DeckRules, errors: &mut Vec<String>) {
    let main = deck.len_of(DeckZone::Main);
    if main < rules.main_min {
        errors.push(format!("Main Deck too small ({main}/{})", rules.main_min));
    }
    if main > rules.main_max {
        errors.push(format!("Main Deck too large ({main}/{})", rules.main_max));
    }

    for zone in [DeckZone::Extra, DeckZone::Side] {
        let len = deck.len_of(zone);
        let max = rules.max_for(zone);
        if len > max {
            errors.push(format!("{zone} too large ({len}/{max})"));
        }
    }
}

fn check_copy_limits(
    deck: &DeckPartition,
    errors: &mut Vec<String>,
    errored_card_ids: &mut SmallVec<[CardId; 4]>,
) {
    // Counts per card, plus first-seen order so output is stable.
    let mut counts: FxHashMap<CardId, usize> = FxHashMap::default();
    let mut order: Vec<&Card> = Vec::new();

    for instance in deck.iter_all() {
        let count = counts.entry(instance.card_id()).or_insert(0);
        if *count == 0 {
            order.push(&instance.card);
        }
        *count += 1;
    }

    for card in order {
        let count = counts.get(&card.id).copied().unwrap_or_default();
        let limit = card.copy_limit();
        trace!(card = %card.id, count, limit, "copy count");

        if count > limit {
            errors.push(format!(
                "Illegal count for \"{}\": {count}/{limit} ({})",
                card.name,
                card.status()
            ));
            errored_card_ids.push(card.id);
        }
    }
}

fn check_advisories(deck: &DeckPartition, rules: &DeckRules, warnings: &mut Vec<String>) {
    if deck.count_tag(DeckZone::Main, RoleTag::Starter) == 0 {
        warnings.push("No 'Starter' cards identified in Main Deck.".to_string());
    }

    let bricks = deck.count_tag(DeckZone::Main, RoleTag::Brick);
    if bricks > 0 {
        let odds = calculate_probability(
            deck.len_of(DeckZone::Main) as i64,
            bricks as i64,
            rules.hand_size as i64,
            1,
        );
        if odds > rules.brick_warning_threshold {
            warnings.push(format!("High brick risk: {odds:.1}% to open a Brick."));
        }
    }
}
