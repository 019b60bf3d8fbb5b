//! Game configuration types.
//!
//! Sessions are configured at startup by providing:
//! - `Level`: Deck size and move budget for one difficulty tier
//! - `LevelSet`: The ordered tiers, attempted first to last
//! - `DeckRule`: How a level's `pair_count` maps to distinct pair values
//! - `GameConfig`: Combines all configuration
//!
//! The configuration is immutable once an engine has been built from it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// One difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Nominal number of pairs. See `DeckRule` for how it is interpreted.
    pub pair_count: u32,

    /// Moves allowed before the level counts as failed.
    pub move_budget: u32,
}

impl Level {
    /// Create a new level.
    #[must_use]
    pub const fn new(pair_count: u32, move_budget: u32) -> Self {
        Self {
            pair_count,
            move_budget,
        }
    }

    /// Number of distinct pair values dealt under `rule`.
    #[must_use]
    pub const fn distinct_values(&self, rule: DeckRule) -> u32 {
        match rule {
            DeckRule::Inclusive => self.pair_count.saturating_add(1),
            DeckRule::Exact => self.pair_count,
        }
    }

    /// Number of cards dealt under `rule`.
    #[must_use]
    pub const fn card_count(&self, rule: DeckRule) -> usize {
        2 * self.distinct_values(rule) as usize
    }
}

/// How `Level::pair_count` bounds the generated pair values.
///
/// `Inclusive` deals values `0..=pair_count`, one pair more than the name
/// suggests; a "3-pair" level has 8 cards. This is how the shipped level
/// table was tuned, so it is the default. `Exact` deals `0..pair_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckRule {
    #[default]
    Inclusive,
    Exact,
}

/// Ordered sequence of levels. Index 0 is played first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet(Vec<Level>);

impl LevelSet {
    /// Create a level set from an ordered list.
    pub fn new(levels: impl Into<Vec<Level>>) -> Self {
        Self(levels.into())
    }

    /// Get the level at `index`, or `None` past the last level.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.0.get(index)
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over levels in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.0.iter()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self(vec![
            Level::new(3, 8),
            Level::new(4, 10),
            Level::new(5, 12),
            Level::new(6, 14),
            Level::new(7, 16),
        ])
    }
}

const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Largest `pair_count` a level may declare.
pub const MAX_PAIR_COUNT: u32 = 1024;

fn default_mismatch_delay_ms() -> u64 {
    DEFAULT_MISMATCH_DELAY_MS
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty tiers in play order.
    #[serde(default)]
    pub levels: LevelSet,

    /// Pair-count interpretation.
    #[serde(default)]
    pub deck_rule: DeckRule,

    /// How long a mismatched pair stays face up, in milliseconds.
    #[serde(default = "default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: LevelSet::default(),
            deck_rule: DeckRule::default(),
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the level table.
    #[must_use]
    pub fn with_levels(mut self, levels: impl Into<Vec<Level>>) -> Self {
        self.levels = LevelSet::new(levels);
        self
    }

    /// Set the deck rule.
    #[must_use]
    pub fn with_deck_rule(mut self, rule: DeckRule) -> Self {
        self.deck_rule = rule;
        self
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The mismatch display delay.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Check the configuration can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        if let Some(index) = self.levels.iter().position(|l| l.pair_count == 0) {
            return Err(ConfigError::EmptyLevel { index });
        }
        if let Some((index, level)) = self
            .levels
            .iter()
            .enumerate()
            .find(|(_, l)| l.pair_count > MAX_PAIR_COUNT)
        {
            return Err(ConfigError::LevelTooLarge {
                index,
                pair_count: level.pair_count,
            });
        }
        if self.mismatch_delay_ms == 0 {
            return Err(ConfigError::ZeroMismatchDelay);
        }
        Ok(())
    }
}
