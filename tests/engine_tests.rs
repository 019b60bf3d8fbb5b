//! Engine integration tests.
//!
//! These drive `GameEngine` only through its public commands:
//! - Move counting and match resolution
//! - Pass/fail at the budget boundary
//! - Restart and advance semantics
//! - Terminal won state

use std::time::Duration;

use memory_tiles::{
    CardId, Command, FlipSlot, GameConfig, GameEngine, IgnoreReason, Level, Outcome, Status,
};

const SECOND: Duration = Duration::from_secs(1);

fn id(value: u32, copy: u8) -> CardId {
    CardId::new(value, copy)
}

/// Flip a known non-pair and let the clear fire.
fn miss(engine: &mut GameEngine) {
    assert!(matches!(engine.flip(id(0, 1)), Outcome::Revealed(_)));
    assert!(matches!(engine.flip(id(1, 1)), Outcome::Mismatched { .. }));
    assert_eq!(engine.tick(SECOND), Outcome::Cleared);
}

/// Match every pair in value order.
fn solve(engine: &mut GameEngine) {
    let pairs = engine.state().deck.len() as u32 / 2;
    for value in 0..pairs {
        engine.flip(id(value, 1));
        assert!(matches!(engine.flip(id(value, 2)), Outcome::Matched { .. }));
    }
}

/// Session-start scenario: one match, then one mismatch.
#[test]
fn test_match_then_mismatch_scenario() {
    let mut engine = GameEngine::with_seed(2024);
    assert_eq!(engine.level().unwrap().move_budget, 8);

    engine.flip(id(0, 1));
    let outcome = engine.flip(id(0, 2));
    assert_eq!(outcome, Outcome::Matched { first: id(0, 1), second: id(0, 2) });
    assert_eq!(engine.state().moves, 1);
    assert!(engine.state().card(id(0, 1)).unwrap().matched);
    assert!(engine.state().card(id(0, 2)).unwrap().matched);
    assert_eq!(engine.state().flip_slot(), FlipSlot::Empty);

    engine.flip(id(1, 1));
    assert!(matches!(engine.flip(id(2, 1)), Outcome::Mismatched { .. }));
    assert_eq!(engine.state().moves, 2);

    // Still showing just before the delay elapses.
    engine.tick(SECOND - Duration::from_millis(1));
    assert_eq!(engine.state().flip_slot(), FlipSlot::Resolving(id(1, 1), id(2, 1)));

    assert_eq!(engine.tick(Duration::from_millis(1)), Outcome::Cleared);
    assert_eq!(engine.state().flip_slot(), FlipSlot::Empty);
    assert!(!engine.state().card(id(1, 1)).unwrap().matched);
    assert!(!engine.state().card(id(2, 1)).unwrap().matched);
    assert_eq!(engine.state().matched_count(), 2);
}

/// A single flip is not a move; the second one always is.
#[test]
fn test_move_counting() {
    let mut engine = GameEngine::with_seed(1);

    engine.flip(id(3, 2));
    assert_eq!(engine.state().moves, 0);

    engine.flip(id(2, 2));
    assert_eq!(engine.state().moves, 1);

    // Ignored flips while resolving are not moves either.
    engine.flip(id(0, 1));
    engine.flip(id(0, 2));
    assert_eq!(engine.state().moves, 1);
}

#[test]
fn test_backpressure_while_resolving() {
    let mut engine = GameEngine::with_seed(1);
    engine.flip(id(1, 1));
    engine.flip(id(2, 1));
    let before = engine.snapshot();

    assert_eq!(engine.flip(id(3, 1)), Outcome::Ignored(IgnoreReason::SlotFull));
    assert_eq!(engine.snapshot(), before);
    assert!(engine.view().cards.iter().all(|c| c.is_disabled));
}

#[test]
fn test_exactly_on_budget_passes() {
    let mut engine = GameEngine::with_seed(7);
    for _ in 0..4 {
        miss(&mut engine);
    }
    solve(&mut engine);

    assert_eq!(engine.state().moves, 8);
    assert_eq!(engine.status(), Status::LevelPassed);
    assert_eq!(engine.view().overage, None);
}

#[test]
fn test_one_over_budget_fails() {
    let mut engine = GameEngine::with_seed(7);
    for _ in 0..5 {
        miss(&mut engine);
    }
    solve(&mut engine);

    assert_eq!(engine.state().moves, 9);
    let view = engine.view();
    assert_eq!(view.status, Status::LevelFailed);
    assert_eq!(view.overage, Some(1));
    assert_eq!(view.remaining_moves, None);
}

#[test]
fn test_remaining_moves_goes_negative() {
    let config = GameConfig::new().with_levels(vec![Level::new(3, 1)]);
    let mut engine = GameEngine::new(config, 3).unwrap();
    miss(&mut engine);
    miss(&mut engine);

    assert_eq!(engine.view().remaining_moves, Some(-1));
    assert_eq!(engine.status(), Status::Playing);
}

#[test]
fn test_restart_reshuffles_same_level() {
    let config = GameConfig::new().with_levels(vec![Level::new(5, 1), Level::new(6, 20)]);
    let mut engine = GameEngine::new(config, 99).unwrap();
    let before: Vec<CardId> = engine.state().deck.iter().map(|c| c.id).collect();

    solve(&mut engine);
    assert_eq!(engine.status(), Status::LevelFailed);
    assert_eq!(engine.restart_level(), Outcome::LevelStarted { level: 0 });

    let after: Vec<CardId> = engine.state().deck.iter().map(|c| c.id).collect();
    assert_eq!(engine.state().level_index, 0);
    assert_eq!(after.len(), before.len());
    assert_ne!(after, before);
    assert_eq!(engine.state().moves, 0);
    assert_eq!(engine.state().matched_count(), 0);
    assert_eq!(engine.status(), Status::Playing);
}

#[test]
fn test_advance_through_all_levels() {
    let mut engine = GameEngine::with_seed(5);
    let levels = engine.config().levels.len();

    for index in 0..levels {
        assert_eq!(engine.state().level_index, index);
        let level = *engine.level().unwrap();
        assert_eq!(engine.state().deck.len(), 2 * (level.pair_count as usize + 1));

        solve(&mut engine);
        assert_eq!(engine.status(), Status::LevelPassed);

        let outcome = engine.advance_level();
        if index + 1 < levels {
            assert_eq!(outcome, Outcome::LevelStarted { level: index + 1 });
            assert_eq!(engine.state().moves, 0);
        } else {
            assert_eq!(outcome, Outcome::Won);
        }
    }

    let view = engine.view();
    assert_eq!(view.status, Status::Won);
    assert!(view.cards.is_empty());
    assert_eq!(engine.flip(id(0, 1)), Outcome::Ignored(IgnoreReason::GameWon));
    assert_eq!(engine.dispatch(Command::AdvanceLevel), Outcome::Ignored(IgnoreReason::GameWon));
    assert_eq!(engine.dispatch(Command::RestartLevel), Outcome::Ignored(IgnoreReason::GameWon));
}

#[test]
fn test_wrong_phase_commands_change_nothing() {
    let mut engine = GameEngine::with_seed(8);
    engine.flip(id(0, 1));
    let before = engine.snapshot();

    assert_eq!(engine.advance_level(), Outcome::Ignored(IgnoreReason::NotPassed));
    assert_eq!(engine.restart_level(), Outcome::Ignored(IgnoreReason::NotFailed));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_string_ids_from_the_view() {
    let mut engine = GameEngine::with_seed(12);
    let picked = engine.view().cards[3].id.to_string();

    let id: CardId = picked.parse().unwrap();
    assert_eq!(engine.dispatch(Command::Flip(id)), Outcome::Revealed(id));
    assert!(engine.view().card(id).unwrap().is_flipped);
}
