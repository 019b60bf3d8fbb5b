//! Game rules as pure transitions.
//!
//! - `flip`: flip-slot state machine and match resolution
//! - `scoring`: level status, remaining moves, overage
//!
//! Nothing here owns state or time; `engine::GameEngine` sequences these
//! calls and schedules the mismatch clear.

pub mod flip;
pub mod scoring;

pub use flip::{apply_flip, clear_mismatch, reject_flip, FlipResolution, IgnoreReason};
pub use scoring::{evaluate, overage, remaining_moves, Status};
