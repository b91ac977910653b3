//! Deck legality tests.
//!
//! These tests verify the validator's contract:
//! - Size bounds on every zone
//! - Copy limits counted across main, extra and side together
//! - Banlist-driven limits
//! - Advisory warnings that never affect validity

use deckdojo_engine::cards::{BanStatus, Card, CardId, DeckCard, InstanceId, RoleTag};
use deckdojo_engine::deck::DeckPartition;
use deckdojo_engine::validation::validate_deck;

/// Build `count` instances spread over distinct cards, at most 3 copies each.
fn legal_cards(count: u32, first_card: u32, first_instance: u64) -> Vec<DeckCard> {
    (0..count)
        .map(|i| {
            let id = first_card + i / 3;
            DeckCard::new(
                InstanceId::new(first_instance + u64::from(i)),
                Card::new(CardId::new(id), format!("Card {id}"), "Effect Monster")
                    .with_ban_status(BanStatus::Unlimited),
            )
        })
        .collect()
}

fn with_starter(mut cards: Vec<DeckCard>) -> Vec<DeckCard> {
    cards[0].tag = Some(RoleTag::Starter);
    cards
}

fn copies(card: &Card, count: u64, first_instance: u64) -> Vec<DeckCard> {
    (0..count)
        .map(|i| DeckCard::new(InstanceId::new(first_instance + i), card.clone()))
        .collect()
}

// =============================================================================
// Size Bounds
// =============================================================================

#[test]
fn test_forty_card_deck_is_valid() {
    let deck = DeckPartition::from_zones(with_starter(legal_cards(40, 0, 0)), vec![], vec![]);
    let result = validate_deck(&deck);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.errored_card_ids.is_empty());
}

#[test]
fn test_thirty_nine_cards_is_too_small() {
    let deck = DeckPartition::from_zones(with_starter(legal_cards(39, 0, 0)), vec![], vec![]);
    let result = validate_deck(&deck);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("39/40"));
}

#[test]
fn test_empty_deck_only_size_error() {
    let result = validate_deck(&DeckPartition::new());

    assert_eq!(result.errors, vec!["Main Deck too small (0/40)"]);
    assert!(result.errored_card_ids.is_empty());
}

#[test]
fn test_upper_bounds_are_inclusive() {
    let deck = DeckPartition::from_zones(
        with_starter(legal_cards(60, 0, 0)),
        legal_cards(15, 100, 1000),
        legal_cards(15, 200, 2000),
    );
    let result = validate_deck(&deck);

    assert!(result.is_valid, "{:?}", result.errors);
    assert!(result.errors.is_empty());
}

#[test]
fn test_sixty_one_cards_is_too_large() {
    let deck = DeckPartition::from_zones(with_starter(legal_cards(61, 0, 0)), vec![], vec![]);
    let result = validate_deck(&deck);

    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Main Deck too large (61/60)"]);
}

#[test]
fn test_sixteen_extra_or_side_is_too_large() {
    let extra = DeckPartition::from_zones(
        with_starter(legal_cards(40, 0, 0)),
        legal_cards(16, 100, 1000),
        vec![],
    );
    assert_eq!(validate_deck(&extra).errors, vec!["Extra Deck too large (16/15)"]);

    let side = DeckPartition::from_zones(
        with_starter(legal_cards(40, 0, 0)),
        vec![],
        legal_cards(16, 200, 2000),
    );
    assert_eq!(validate_deck(&side).errors, vec!["Side Deck too large (16/15)"]);
}

#[test]
fn test_multiple_size_violations_reported_together() {
    let deck = DeckPartition::from_zones(
        legal_cards(10, 0, 0),
        legal_cards(16, 100, 1000),
        legal_cards(16, 200, 2000),
    );
    let result = validate_deck(&deck);

    assert_eq!(
        result.errors,
        vec![
            "Main Deck too small (10/40)",
            "Extra Deck too large (16/15)",
            "Side Deck too large (16/15)",
        ]
    );
}

// =============================================================================
// Copy Limits
// =============================================================================

#[test]
fn test_four_copies_across_main_and_side() {
    let pot = Card::new(CardId::new(999), "Pot of Prosperity", "Spell Card");
    let mut main = with_starter(legal_cards(37, 0, 0));
    main.extend(copies(&pot, 3, 500));
    let side = copies(&pot, 1, 600);

    let result = validate_deck(&DeckPartition::from_zones(main, vec![], side));

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("4/3"));
    assert_eq!(
        result.errors[0],
        "Illegal count for \"Pot of Prosperity\": 4/3 (Unlimited)"
    );
    assert!(result.errored_card_ids.contains(&CardId::new(999)));
}

#[test]
fn test_single_banned_card_is_illegal() {
    let banned = Card::new(CardId::new(55144522), "Pot of Greed", "Spell Card")
        .with_ban_status(BanStatus::Banned);
    let mut main = with_starter(legal_cards(39, 0, 0));
    main.extend(copies(&banned, 1, 900));

    let result = validate_deck(&DeckPartition::from_zones(main, vec![], vec![]));

    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Illegal count for \"Pot of Greed\": 1/0 (Banned)"]);
    assert!(result.is_card_errored(CardId::new(55144522)));
}

#[test]
fn test_banned_card_in_side_is_still_illegal() {
    let banned = Card::new(CardId::new(7), "Raigeki", "Spell Card").with_ban_status(BanStatus::Banned);
    let deck = DeckPartition::from_zones(
        with_starter(legal_cards(40, 100, 0)),
        vec![],
        copies(&banned, 1, 900),
    );

    assert!(!validate_deck(&deck).is_valid);
}

#[test]
fn test_limited_card_two_copies() {
    let limited = Card::new(CardId::new(3), "Limited One", "Trap Card")
        .with_ban_status(BanStatus::Limited);
    let mut main = with_starter(legal_cards(38, 100, 0));
    main.extend(copies(&limited, 2, 900));

    let result = validate_deck(&DeckPartition::from_zones(main, vec![], vec![]));

    assert_eq!(result.errors, vec!["Illegal count for \"Limited One\": 2/1 (Limited)"]);
}

#[test]
fn test_missing_status_defaults_to_unlimited() {
    let plain = Card::new(CardId::new(4), "Plain", "Normal Monster");
    let mut main = with_starter(legal_cards(36, 100, 0));
    main.extend(copies(&plain, 4, 900));

    let result = validate_deck(&DeckPartition::from_zones(main, vec![], vec![]));

    assert_eq!(result.errors, vec!["Illegal count for \"Plain\": 4/3 (Unlimited)"]);
}

#[test]
fn test_errored_ids_in_first_seen_order() {
    let a = Card::new(CardId::new(20), "A", "Spell Card").with_ban_status(BanStatus::Banned);
    let b = Card::new(CardId::new(10), "B", "Spell Card").with_ban_status(BanStatus::Banned);
    let mut main = with_starter(legal_cards(38, 100, 0));
    main.extend(copies(&a, 1, 900));
    main.extend(copies(&b, 1, 901));

    let result = validate_deck(&DeckPartition::from_zones(main, vec![], vec![]));

    assert_eq!(result.errored_card_ids.as_slice(), &[CardId::new(20), CardId::new(10)]);
}

// =============================================================================
// Advisories
// =============================================================================

#[test]
fn test_no_starter_warns_but_stays_valid() {
    let deck = DeckPartition::from_zones(legal_cards(40, 0, 0), vec![], vec![]);
    let result = validate_deck(&deck);

    assert!(result.is_valid);
    assert_eq!(result.warnings, vec!["No 'Starter' cards identified in Main Deck."]);
}

#[test]
fn test_starter_in_side_does_not_count() {
    let mut side = legal_cards(1, 500, 900);
    side[0].tag = Some(RoleTag::Starter);
    let deck = DeckPartition::from_zones(legal_cards(40, 0, 0), vec![], side);

    assert_eq!(validate_deck(&deck).warnings.len(), 1);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_validation_is_idempotent() {
    let banned = Card::new(CardId::new(1), "X", "Spell Card").with_ban_status(BanStatus::Banned);
    let mut main = legal_cards(30, 100, 0);
    main.extend(copies(&banned, 2, 900));
    let deck = DeckPartition::from_zones(main, legal_cards(16, 300, 2000), vec![]);

    let first = validate_deck(&deck);
    let second = validate_deck(&deck);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
