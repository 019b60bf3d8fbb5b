//! Read-only view data derived from `GameState`.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, CardValue, GameConfig, GameState};
use crate::rules::{self, Status};

/// Everything a renderer needs for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub value: CardValue,
    pub matched: bool,
    /// Face up in the flip slot.
    pub is_flipped: bool,
    /// Two cards are face up; picks are not accepted.
    pub is_disabled: bool,
}

impl CardView {
    /// Check if the card's face should be shown.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.matched || self.is_flipped
    }
}

/// Session snapshot for the presentation shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Cards in deck order. Empty once won.
    pub cards: Vec<CardView>,
    /// 1-based level number.
    pub level: usize,
    /// Moves made on the current deck.
    pub score: u32,
    /// Budget minus moves while playing, `None` otherwise.
    pub remaining_moves: Option<i64>,
    /// Moves over budget when the level failed, `None` otherwise.
    pub overage: Option<u32>,
    pub status: Status,
}

impl ViewModel {
    /// Derive the view of `state` under `config`.
    #[must_use]
    pub fn build(state: &GameState, config: &GameConfig) -> Self {
        let status = rules::evaluate(state, &config.levels);
        let level = config.levels.get(state.level_index);
        let disabled = state.flipped.len() >= 2;

        let cards = state
            .deck
            .iter()
            .map(|card: &Card| CardView {
                id: card.id,
                value: card.value,
                matched: card.matched,
                is_flipped: state.is_flipped(card.id),
                is_disabled: disabled,
            })
            .collect();

        let remaining_moves = match (status, level) {
            (Status::Playing, Some(level)) => Some(rules::remaining_moves(level, state.moves)),
            _ => None,
        };
        let overage = match (status, level) {
            (Status::LevelFailed, Some(level)) => Some(rules::overage(level, state.moves)),
            _ => None,
        };

        Self {
            cards,
            level: state.level_index + 1,
            score: state.moves,
            remaining_moves,
            overage,
            status,
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards a player could pick right now.
    pub fn pickable(&self) -> impl Iterator<Item = &CardView> {
        self.cards
            .iter()
            .filter(|c| !c.matched && !c.is_flipped && !c.is_disabled)
    }
}
