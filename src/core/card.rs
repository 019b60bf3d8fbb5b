//! Card identity and per-card state.
//!
//! ## ID Layout
//!
//! Every card is one copy of a pair. Its id combines the pair value with a
//! 1-based copy index and renders as `"<value>-<copy>"`:
//!
//! ```
//! use memory_tiles::core::CardId;
//!
//! let id = CardId::new(3, 2);
//! assert_eq!(id.to_string(), "3-2");
//! assert_eq!("3-2".parse::<CardId>().unwrap(), id);
//! ```
//!
//! Ids are unique within a deck and stable for its lifetime. A regenerated
//! deck reuses the same ids, so the engine's generation token (not the id)
//! tells a stale reference apart from a current one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseCardIdError;

/// Pair key shared by the two cards of a pair.
pub type CardValue = u32;

/// Unique identifier of a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CardId {
    value: CardValue,
    copy: u8,
}

impl CardId {
    /// Create an id for copy `copy` (1 or 2) of pair `value`.
    #[must_use]
    pub const fn new(value: CardValue, copy: u8) -> Self {
        Self { value, copy }
    }

    /// The pair value encoded in this id.
    #[must_use]
    pub const fn value(self) -> CardValue {
        self.value
    }

    /// The 1-based copy index.
    #[must_use]
    pub const fn copy(self) -> u8 {
        self.copy
    }

    /// Id of the other card of the same pair.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self {
            value: self.value,
            copy: if self.copy == 1 { 2 } else { 1 },
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.value, self.copy)
    }
}

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCardIdError::Malformed(s.to_string());

        let (value, copy) = s.split_once('-').ok_or_else(malformed)?;
        let value = value.parse::<CardValue>().map_err(|_| malformed())?;
        let copy = copy.parse::<u8>().map_err(|_| malformed())?;

        if !(1..=2).contains(&copy) {
            return Err(ParseCardIdError::BadCopy { id: s.to_string(), copy });
        }

        Ok(Self::new(value, copy))
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CardId {
    type Error = ParseCardIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One card of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable id, unique within the deck.
    pub id: CardId,

    /// Pair key. Exactly two cards in a deck share it.
    pub value: CardValue,

    /// Set once the pair has been found. Never cleared within a deck.
    pub matched: bool,
}

impl Card {
    /// Create an unmatched card for copy `copy` of pair `value`.
    #[must_use]
    pub const fn new(value: CardValue, copy: u8) -> Self {
        Self {
            id: CardId::new(value, copy),
            value,
            matched: false,
        }
    }

    /// Check if this card pairs with `other`.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.value == other.value
    }
}
