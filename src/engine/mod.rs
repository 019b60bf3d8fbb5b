//! Session engine.
//!
//! `GameEngine` is the only owner of `GameState`. It sequences the pure
//! transitions from `rules`, deals decks from `deck`, and keeps the
//! mismatch clear in step with the deck it was scheduled for.
//!
//! ## Staleness
//!
//! Dealing a deck (next level or restart) cancels any pending clear and
//! bumps `GameState::generation`. A `ClearTicket` carrying an older
//! generation is ignored whichever path delivers it.

pub mod game;

pub use game::{Command, GameEngine, Outcome};
