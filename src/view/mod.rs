//! Presentation-facing view data.
//!
//! Renderers receive one `CardView` per card and report picks back as
//! `Command::Flip(id)`. Nothing in this module mutates state.

pub mod model;

pub use model::{CardView, ViewModel};
