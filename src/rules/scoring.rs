//! Level status and move accounting.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Level, LevelSet};

/// Where the session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// Unmatched cards remain.
    Playing,
    /// Deck cleared within budget; `advance_level` is available.
    LevelPassed,
    /// Deck cleared over budget; `restart_level` is available.
    LevelFailed,
    /// Every level cleared. Terminal.
    Won,
}

impl Status {
    /// Check if no further input is accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Status::Won
    }
}

/// Evaluate the session status.
#[must_use]
pub fn evaluate(state: &GameState, levels: &LevelSet) -> Status {
    let level = match levels.get(state.level_index) {
        Some(level) => level,
        None => return Status::Won,
    };

    if !state.is_done() {
        Status::Playing
    } else if state.moves <= level.move_budget {
        Status::LevelPassed
    } else {
        Status::LevelFailed
    }
}

/// Moves left in the budget. Goes negative once exceeded.
#[must_use]
pub fn remaining_moves(level: &Level, moves: u32) -> i64 {
    i64::from(level.move_budget) - i64::from(moves)
}

/// Moves spent beyond the budget, zero if within it.
#[must_use]
pub fn overage(level: &Level, moves: u32) -> u32 {
    moves.saturating_sub(level.move_budget)
}
