//! Error types for configuration loading and id parsing.
//!
//! Game commands never fail; see `rules::IgnoreReason` for how rejected
//! commands are reported.

use thiserror::Error;

/// Errors raised while building or validating a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level table is empty")]
    NoLevels,

    #[error("level {index} has no pairs")]
    EmptyLevel { index: usize },

    #[error("level {index} declares {pair_count} pairs, above the supported maximum")]
    LevelTooLarge { index: usize, pair_count: u32 },

    #[error("mismatch delay must be greater than zero")]
    ZeroMismatchDelay,

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when parsing a `"<value>-<copy>"` card id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardIdError {
    #[error("malformed card id {0:?}")]
    Malformed(String),

    #[error("card id {id:?} has copy index {copy}, expected 1 or 2")]
    BadCopy { id: String, copy: u8 },
}
