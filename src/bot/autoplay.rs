//! Headless play loop.
//!
//! Drives a `GameEngine` with a `Picker` through the same commands a
//! presentation shell would send, advancing the logical clock whenever a
//! mismatch is on display.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::engine::{GameEngine, Outcome};
use crate::rules::Status;

use super::picker::Picker;

/// How one attempt at a level went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    /// 0-based level index.
    pub level: usize,
    pub moves: u32,
    pub budget: u32,
    /// `LevelPassed`, `LevelFailed`, or `Playing` if the move cap was hit.
    pub status: Status,
}

impl LevelReport {
    /// Check if the attempt passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Status::LevelPassed
    }
}

/// Configuration for a full session run.
#[derive(Clone, Debug)]
pub struct AutoplayConfig {
    /// Give up on an attempt after this many moves.
    pub max_moves: u32,

    /// Give up on the session after this many attempts in total.
    pub max_attempts: usize,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            max_moves: 500,
            max_attempts: 100,
        }
    }
}

impl AutoplayConfig {
    /// Create a config with the default caps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-attempt move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the total attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }
}

/// Play the current deck until it is cleared or `max_moves` is reached.
///
/// Returns `None` if the session is already won.
pub fn play_level<P: Picker + ?Sized>(
    engine: &mut GameEngine,
    picker: &mut P,
    max_moves: u32,
) -> Option<LevelReport> {
    let budget = engine.level()?.move_budget;
    let delay = engine.config().mismatch_delay();

    while engine.status() == Status::Playing && engine.state().moves < max_moves {
        if engine.pending_clear().is_some() {
            engine.tick(delay);
            continue;
        }

        let view = engine.view();
        let Some(id) = picker.pick(&view) else {
            debug!("picker found nothing to flip");
            break;
        };

        if !engine.flip(id).is_ignored() {
            picker.observe(&engine.view());
        }
    }

    // Leave the table clean for the caller.
    if engine.pending_clear().is_some() {
        engine.tick(delay);
    }

    Some(LevelReport {
        level: engine.state().level_index,
        moves: engine.state().moves,
        budget,
        status: engine.status(),
    })
}

/// Play levels until the session is won or a cap is reached.
///
/// Passed levels are advanced, failed ones restarted.
pub fn play_session<P: Picker + ?Sized>(
    engine: &mut GameEngine,
    picker: &mut P,
    config: &AutoplayConfig,
) -> Vec<LevelReport> {
    let mut reports = Vec::new();

    while reports.len() < config.max_attempts {
        let Some(report) = play_level(engine, picker, config.max_moves) else {
            break;
        };
        info!(
            "level {}: {} moves of {} -> {:?}",
            report.level + 1,
            report.moves,
            report.budget,
            report.status
        );
        reports.push(report);

        let next = match report.status {
            Status::LevelPassed => engine.advance_level(),
            Status::LevelFailed => engine.restart_level(),
            _ => break,
        };
        picker.reset();

        if next == Outcome::Won {
            break;
        }
    }

    reports
}
