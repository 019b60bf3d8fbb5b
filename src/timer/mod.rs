//! Mismatch-clear scheduling.
//!
//! The only time-driven transition in the game. Every scheduled clear is
//! keyed by the deck generation it was created for, so a clear outliving
//! its deck can be recognized and dropped.

pub mod mismatch;

pub use mismatch::{ClearTicket, MismatchTimer};
