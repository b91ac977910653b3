//! Fisher-Yates shuffling and opening-hand draws.

use tracing::debug;

use super::session::DrawSession;
use crate::cards::DeckCard;
use crate::core::DrawRng;

/// Shuffle a slice in place with the Fisher-Yates algorithm.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `[0, i]`. Every permutation is equally likely.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut DrawRng) {
    for i in (1..items.len()).rev() {
        let j = rng.index_inclusive(i);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `source` and deal an opening hand from it.
///
/// Uses a fresh OS-seeded RNG. The hand holds `min(hand_size, source.len())`
/// cards and the rest of the shuffled copy becomes the remaining pile.
/// `source` itself is never modified.
#[must_use]
pub fn draw_hand(source: &[DeckCard], hand_size: usize) -> DrawSession {
    draw_hand_with(source, hand_size, &mut DrawRng::from_entropy())
}

/// Like `draw_hand`, with an explicit RNG for reproducible draws.
///
/// ```
/// use deckdojo_engine::core::DrawRng;
/// use deckdojo_engine::simulation::draw_hand_with;
///
/// let session = draw_hand_with(&[], 5, &mut DrawRng::seeded(1));
/// assert!(session.hand().is_empty());
/// ```
#[must_use]
pub fn draw_hand_with(source: &[DeckCard], hand_size: usize, rng: &mut DrawRng) -> DrawSession {
    let mut shuffled = source.to_vec();
    fisher_yates(&mut shuffled, rng);

    let remaining = shuffled.split_off(hand_size.min(shuffled.len()));
    debug!(
        deck = source.len(),
        hand = shuffled.len(),
        remaining = remaining.len(),
        "dealt opening hand"
    );
    DrawSession::new(shuffled, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, InstanceId};

    fn deck(size: u64) -> Vec<DeckCard> {
        (0..size)
            .map(|i| {
                DeckCard::new(
                    InstanceId::new(i),
                    Card::new(CardId::new((i % 13) as u32), format!("Card {i}"), "Spell Card"),
                )
            })
            .collect()
    }

    fn sorted_ids<'a>(cards: impl IntoIterator<Item = &'a DeckCard>) -> Vec<InstanceId> {
        let mut ids: Vec<_> = cards.into_iter().map(|c| c.instance_id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_fisher_yates_is_permutation() {
        let mut rng = DrawRng::seeded(42);
        let mut data: Vec<u32> = (1..=10).collect();
        fisher_yates(&mut data, &mut rng);

        assert_ne!(data, (1..=10).collect::<Vec<_>>());
        data.sort();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_fisher_yates_trivial_inputs() {
        let mut rng = DrawRng::seeded(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        let mut one = vec![7];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_draw_partitions_source() {
        let source = deck(40);
        let session = draw_hand_with(&source, 5, &mut DrawRng::seeded(3));

        assert_eq!(session.hand().len(), 5);
        assert_eq!(session.remaining().len(), 35);
        assert_eq!(
            sorted_ids(session.hand().iter().chain(session.remaining())),
            sorted_ids(&source)
        );
    }

    #[test]
    fn test_draw_leaves_source_untouched() {
        let source = deck(40);
        let before = source.clone();
        let _ = draw_hand(&source, 5);
        assert_eq!(source, before);
    }

    #[test]
    fn test_hand_capped_by_source() {
        let source = deck(3);
        let session = draw_hand(&source, 5);
        assert_eq!(session.hand().len(), 3);
        assert!(session.remaining().is_empty());
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let source = deck(40);
        let a = draw_hand_with(&source, 6, &mut DrawRng::seeded(99));
        let b = draw_hand_with(&source, 6, &mut DrawRng::seeded(99));
        assert_eq!(a, b);
    }
}
