//! Deck generation and match-resolution properties.

use std::collections::HashSet;

use proptest::prelude::*;

use memory_tiles::rules::{apply_flip, FlipResolution};
use memory_tiles::{
    check_deck, generate_deck, CardId, DeckRule, GameConfig, GameEngine, GameRng, GameState, Level,
};

fn deck_rule() -> impl Strategy<Value = DeckRule> {
    prop_oneof![Just(DeckRule::Inclusive), Just(DeckRule::Exact)]
}

proptest! {
    /// Every deal has two cards per value, unique ids, correct size.
    #[test]
    fn prop_deck_integrity(pairs in 1u32..40, seed in any::<u64>(), rule in deck_rule()) {
        let level = Level::new(pairs, 0);
        let mut rng = GameRng::new(seed);
        let deck = generate_deck(&level, rule, &mut rng);

        prop_assert_eq!(deck.len(), level.card_count(rule));
        prop_assert!(check_deck(&deck, level.card_count(rule)).is_ok());

        let ids: HashSet<CardId> = deck.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), deck.len());
        prop_assert!(deck.iter().all(|c| !c.matched));
    }

    /// Two flips mark both cards iff they pair, and never a third card.
    #[test]
    fn prop_match_correctness(seed in any::<u64>(), i in 0usize..8, j in 0usize..8) {
        prop_assume!(i != j);

        let mut rng = GameRng::new(seed);
        let deck = generate_deck(&Level::new(3, 8), DeckRule::Inclusive, &mut rng);
        let (a, b) = (deck[i], deck[j]);
        let mut state = GameState::new(0, deck);

        apply_flip(&mut state, a.id);
        let result = apply_flip(&mut state, b.id);

        prop_assert_eq!(state.moves, 1);
        if a.value == b.value {
            prop_assert_eq!(result, FlipResolution::Matched { first: a.id, second: b.id });
            prop_assert_eq!(state.matched_count(), 2);
            prop_assert!(state.card(a.id).unwrap().matched);
            prop_assert!(state.card(b.id).unwrap().matched);
            prop_assert!(state.flipped.is_empty());
        } else {
            prop_assert_eq!(result, FlipResolution::Mismatched { first: a.id, second: b.id });
            prop_assert_eq!(state.matched_count(), 0);
            prop_assert_eq!(state.flipped.len(), 2);
        }
    }

    /// Restart keeps the level and its size.
    #[test]
    fn prop_restart_keeps_level(seed in any::<u64>()) {
        let config = GameConfig::new().with_levels(vec![Level::new(2, 0)]);
        let mut engine = GameEngine::new(config, seed).unwrap();

        for value in 0..3 {
            engine.flip(CardId::new(value, 1));
            engine.flip(CardId::new(value, 2));
        }
        engine.restart_level();

        prop_assert_eq!(engine.state().level_index, 0);
        prop_assert_eq!(engine.state().deck.len(), 6);
        prop_assert_eq!(engine.state().moves, 0);
        prop_assert!(check_deck(&engine.state().deck, 6).is_ok());
    }
}

/// Each value lands in each position about equally often.
#[test]
fn test_shuffle_fairness() {
    const DEALS: usize = 40_000;
    let level = Level::new(3, 8);
    let mut rng = GameRng::new(1234);

    // counts[position][value]
    let mut counts = [[0usize; 4]; 8];
    for _ in 0..DEALS {
        let deck = generate_deck(&level, DeckRule::Inclusive, &mut rng);
        for (position, card) in deck.iter().enumerate() {
            counts[position][card.value as usize] += 1;
        }
    }

    // Each value holds 2 of 8 slots.
    let expected = DEALS / 4;
    let tolerance = expected / 20;
    for (position, row) in counts.iter().enumerate() {
        for (value, &count) in row.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < tolerance,
                "value {value} at position {position}: {count}, expected ~{expected}"
            );
        }
    }
}

#[test]
fn test_copies_are_not_pinned() {
    let level = Level::new(3, 8);
    let mut rng = GameRng::new(77);
    let mut first_positions = HashSet::new();

    for _ in 0..200 {
        let deck = generate_deck(&level, DeckRule::Inclusive, &mut rng);
        let pos = deck.iter().position(|c| c.id == CardId::new(0, 1)).unwrap();
        first_positions.insert(pos);
    }

    assert_eq!(first_positions.len(), 8);
}
