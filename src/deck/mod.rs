//! Deck generation.
//!
//! A deck for a level holds two cards for every pair value its `DeckRule`
//! allows, uniformly shuffled by `GameRng`. Ids follow `"<value>-<copy>"`.

pub mod generator;

pub use generator::{check_deck, generate_deck, DeckDefect};
