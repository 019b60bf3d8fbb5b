//! Game state: the single owned record every transition mutates.
//!
//! ## GameState
//!
//! - Level index (monotonic across the session)
//! - Deck for the current level
//! - Flip slot (0-2 face-up, unmatched card ids)
//! - Move count for the current level
//! - Generation token identifying the current deck instance
//!
//! ## Flip Slot
//!
//! ```text
//! Empty --flip--> One --flip(match)--> Empty
//!                  |
//!                  +--flip(mismatch)--> Resolving --timer--> Empty
//! ```
//!
//! The deck is an `im::Vector` so snapshots handed to observers are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};

/// Face-up, unmatched cards awaiting resolution.
pub type FlippedCards = SmallVec<[CardId; 2]>;

/// Phase of the flip slot, derived from how many cards it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipSlot {
    /// No card face up.
    Empty,
    /// One card face up, awaiting the second pick.
    One(CardId),
    /// Two mismatched cards face up until the clear timer fires.
    Resolving(CardId, CardId),
}

/// Complete session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Index into the level table. Past the end means the session is won.
    pub level_index: usize,

    /// Cards of the current level, in table order. Empty once won.
    pub deck: Vector<Card>,

    /// Ids of face-up, unmatched cards.
    pub flipped: FlippedCards,

    /// Moves made on the current deck.
    pub moves: u32,

    /// Bumped every time a deck is dealt.
    pub generation: u64,
}

impl GameState {
    /// Create a state at `level_index` holding `deck`, generation 0.
    #[must_use]
    pub fn new(level_index: usize, deck: Vector<Card>) -> Self {
        Self {
            level_index,
            deck,
            flipped: FlippedCards::new(),
            moves: 0,
            generation: 0,
        }
    }

    /// Replace the deck for a level (re)start.
    ///
    /// Resets moves and the flip slot and advances the generation token.
    pub fn deal(&mut self, level_index: usize, deck: Vector<Card>) {
        self.level_index = level_index;
        self.deck = deck;
        self.flipped.clear();
        self.moves = 0;
        self.generation += 1;
    }

    /// Current phase of the flip slot.
    #[must_use]
    pub fn flip_slot(&self) -> FlipSlot {
        match self.flipped.as_slice() {
            [] => FlipSlot::Empty,
            [first] => FlipSlot::One(*first),
            [first, second, ..] => FlipSlot::Resolving(*first, *second),
        }
    }

    /// Find a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    /// Position of a card in the deck.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.deck.iter().position(|c| c.id == id)
    }

    /// Check if a card is face up in the flip slot.
    #[must_use]
    pub fn is_flipped(&self, id: CardId) -> bool {
        self.flipped.contains(&id)
    }

    /// Check if every card of the deck is matched.
    ///
    /// An empty deck counts as done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.deck.iter().all(|c| c.matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.deck.iter().filter(|c| c.matched).count()
    }

    /// Mark a card matched. Returns false if it is not in the deck.
    pub fn mark_matched(&mut self, id: CardId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.deck[idx].matched = true;
                true
            }
            None => false,
        }
    }
}
