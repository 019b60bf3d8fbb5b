//! Automated players.
//!
//! - `Picker`: Strategy trait, sees only the `ViewModel`
//! - `MemoryBot`: Perfect memory of every revealed value
//! - `RandomBot`: Uniform random picks
//! - `play_level` / `play_session`: Drive an engine to completion
//!
//! Used by the `autoplay` binary, the benches, and end-to-end tests.

pub mod autoplay;
pub mod picker;

pub use autoplay::{play_level, play_session, AutoplayConfig, LevelReport};
pub use picker::{MemoryBot, Picker, RandomBot};
