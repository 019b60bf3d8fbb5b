//! Core types: card ids, configuration, state, RNG, errors.
//!
//! Everything else in the crate operates on these types; none of them
//! know about timers or presentation.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use card::{Card, CardId, CardValue};
pub use config::{DeckRule, GameConfig, Level, LevelSet, MAX_PAIR_COUNT};
pub use error::{ConfigError, ParseCardIdError};
pub use rng::GameRng;
pub use state::{FlipSlot, FlippedCards, GameState};
