//! # memory-tiles
//!
//! A tile-matching memory game engine.
//!
//! A deck of paired cards is shuffled face down. The player turns two cards
//! at a time: a matching pair stays face up, a mismatch is shown briefly
//! and turned back. Clearing the deck within the level's move budget
//! unlocks the next, larger deck; going over budget means retrying the
//! level with a fresh shuffle.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GameEngine` owns all state. Everything else reads
//!    derived `ViewModel`s and sends commands.
//!
//! 2. **Pure transitions**: Flip resolution and scoring are plain functions
//!    over `GameState`, testable without an engine or a clock.
//!
//! 3. **Defensive, not failing**: Invalid commands come back as
//!    `Outcome::Ignored` with a reason and change nothing.
//!
//! 4. **Generation-keyed timer**: The mismatch clear carries the deck
//!    generation it was scheduled for, so it can never touch a newer deck.
//!
//! ## Modules
//!
//! - `core`: Card ids, configuration, state, RNG, errors
//! - `deck`: Deck generation
//! - `rules`: Flip resolution and level status
//! - `timer`: Mismatch-clear scheduling
//! - `engine`: The `GameEngine` store and its commands
//! - `view`: Presentation view data
//! - `bot`: Automated players
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_tiles::{CardId, GameEngine, Outcome, Status};
//!
//! let mut engine = GameEngine::with_seed(42);
//!
//! engine.flip(CardId::new(0, 1));
//! assert!(matches!(engine.flip(CardId::new(0, 2)), Outcome::Matched { .. }));
//!
//! engine.flip(CardId::new(1, 1));
//! assert!(matches!(engine.flip(CardId::new(2, 1)), Outcome::Mismatched { .. }));
//! assert_eq!(engine.tick(Duration::from_secs(1)), Outcome::Cleared);
//!
//! let view = engine.view();
//! assert_eq!(view.score, 2);
//! assert_eq!(view.remaining_moves, Some(6));
//! assert_eq!(view.status, Status::Playing);
//! ```

pub mod bot;
pub mod core;
pub mod deck;
pub mod engine;
pub mod rules;
pub mod timer;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardValue, ConfigError, DeckRule, FlipSlot, GameConfig, GameRng, GameState,
    Level, LevelSet, ParseCardIdError, MAX_PAIR_COUNT,
};

pub use crate::deck::{check_deck, generate_deck, DeckDefect};

pub use crate::rules::{FlipResolution, IgnoreReason, Status};

pub use crate::timer::{ClearTicket, MismatchTimer};

pub use crate::engine::{Command, GameEngine, Outcome};

pub use crate::view::{CardView, ViewModel};

pub use crate::bot::{
    play_level, play_session, AutoplayConfig, LevelReport, MemoryBot, Picker, RandomBot,
};
