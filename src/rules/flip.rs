//! Flip resolution.
//!
//! Pure transitions over `GameState`. Timing is not handled here: a
//! mismatch leaves both cards in the slot and it is the caller's job to
//! schedule `clear_mismatch`.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, FlipSlot, GameState};

/// Why a command was rejected without touching state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Every level has been cleared.
    GameWon,
    /// Two cards are already face up.
    SlotFull,
    /// No card with that id in the current deck.
    UnknownCard,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is the one already face up.
    AlreadyFlipped,
    /// `advance_level` outside `LevelPassed`.
    NotPassed,
    /// `restart_level` outside `LevelFailed`.
    NotFailed,
    /// A clear timer from an older deck or an already-cleared mismatch.
    StaleTicket,
}

/// What a single flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipResolution {
    /// No state change.
    Ignored(IgnoreReason),
    /// First card of a move turned face up.
    Revealed(CardId),
    /// Second card completed a pair; both are matched and the slot is empty.
    Matched { first: CardId, second: CardId },
    /// Second card did not pair; both stay face up until cleared.
    Mismatched { first: CardId, second: CardId },
}

/// Apply a flip of card `id`.
///
/// Counts a move when the second card is picked, whatever the outcome.
pub fn apply_flip(state: &mut GameState, id: CardId) -> FlipResolution {
    if let Some(reason) = reject_flip(state, id) {
        return FlipResolution::Ignored(reason);
    }

    match state.flip_slot() {
        FlipSlot::Empty => {
            state.flipped.push(id);
            trace!("revealed {id}");
            FlipResolution::Revealed(id)
        }
        FlipSlot::One(first) => {
            state.moves += 1;

            let pairs = match (state.card(first), state.card(id)) {
                (Some(a), Some(b)) => a.pairs_with(b),
                _ => false,
            };

            if pairs {
                state.mark_matched(first);
                state.mark_matched(id);
                state.flipped.clear();
                trace!("matched {first} and {id}, moves = {}", state.moves);
                FlipResolution::Matched { first, second: id }
            } else {
                state.flipped.push(id);
                trace!("mismatched {first} and {id}, moves = {}", state.moves);
                FlipResolution::Mismatched { first, second: id }
            }
        }
        FlipSlot::Resolving(..) => FlipResolution::Ignored(IgnoreReason::SlotFull),
    }
}

/// Check whether a flip of `id` would be rejected, and why.
#[must_use]
pub fn reject_flip(state: &GameState, id: CardId) -> Option<IgnoreReason> {
    if state.flipped.len() >= 2 {
        return Some(IgnoreReason::SlotFull);
    }

    let card = match state.card(id) {
        Some(card) => card,
        None => return Some(IgnoreReason::UnknownCard),
    };

    if card.matched {
        Some(IgnoreReason::AlreadyMatched)
    } else if state.is_flipped(id) {
        Some(IgnoreReason::AlreadyFlipped)
    } else {
        None
    }
}

/// Turn a mismatched pair face down again.
///
/// Returns false (and changes nothing) unless the slot is resolving.
pub fn clear_mismatch(state: &mut GameState) -> bool {
    match state.flip_slot() {
        FlipSlot::Resolving(..) => {
            state.flipped.clear();
            true
        }
        _ => false,
    }
}
