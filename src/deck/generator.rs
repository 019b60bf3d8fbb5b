//! Deck generation and integrity checks.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Card, CardId, CardValue, DeckRule, GameRng, Level};

/// Deal a fresh, shuffled deck for `level`.
///
/// Emits copies `1` and `2` of every value the rule allows, then shuffles.
/// Nothing outside the returned deck is touched except the RNG stream.
pub fn generate_deck(level: &Level, rule: DeckRule, rng: &mut GameRng) -> Vector<Card> {
    let mut cards = Vec::with_capacity(level.card_count(rule));

    for value in 0..level.distinct_values(rule) {
        cards.push(Card::new(value, 1));
        cards.push(Card::new(value, 2));
    }

    rng.shuffle(&mut cards);
    Vector::from(cards)
}

/// Structural problems a deck can have.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckDefect {
    /// Card count differs from what the level deals.
    WrongSize { expected: usize, actual: usize },
    /// A value appears other than exactly twice.
    UnpairedValue { value: CardValue, count: usize },
    /// Two cards share an id.
    DuplicateId(CardId),
    /// A card's id disagrees with its value.
    MislabeledCard(CardId),
}

/// Check a deck holds exactly two cards per value with unique ids.
pub fn check_deck(deck: &Vector<Card>, expected_len: usize) -> Result<(), DeckDefect> {
    if deck.len() != expected_len {
        return Err(DeckDefect::WrongSize {
            expected: expected_len,
            actual: deck.len(),
        });
    }

    let mut ids = FxHashSet::default();
    let mut tally: FxHashMap<CardValue, usize> = FxHashMap::default();

    for card in deck {
        if card.id.value() != card.value {
            return Err(DeckDefect::MislabeledCard(card.id));
        }
        if !ids.insert(card.id) {
            return Err(DeckDefect::DuplicateId(card.id));
        }
        *tally.entry(card.value).or_insert(0) += 1;
    }

    match tally.into_iter().find(|&(_, count)| count != 2) {
        Some((value, count)) => Err(DeckDefect::UnpairedValue { value, count }),
        None => Ok(()),
    }
}
