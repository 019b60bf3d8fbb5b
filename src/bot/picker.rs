//! Card pickers.
//!
//! Pickers see only what a player sees: the `ViewModel`. They never read
//! the deck directly, so face-down values must be learned by observing.

use rustc_hash::FxHashMap;

use crate::core::{CardId, CardValue, GameRng};
use crate::view::{CardView, ViewModel};

/// Chooses the next card to flip.
pub trait Picker {
    /// Choose a card, or `None` if nothing is pickable.
    fn pick(&mut self, view: &ViewModel) -> Option<CardId>;

    /// Called with the view after every accepted flip.
    fn observe(&mut self, _view: &ViewModel) {}

    /// Called when a new deck is dealt.
    fn reset(&mut self) {}
}

/// Picks uniformly among pickable cards. Remembers nothing.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Picker for RandomBot {
    fn pick(&mut self, view: &ViewModel) -> Option<CardId> {
        let pickable: Vec<CardId> = view.pickable().map(|c| c.id).collect();
        self.rng.choose(&pickable).copied()
    }
}

/// Remembers every value it has seen and completes known pairs.
///
/// With an empty slot it flips a card whose partner it already knows, if
/// any; otherwise an unseen card. As the second pick it takes the known
/// partner of the first card, else another unseen card.
#[derive(Clone, Debug)]
pub struct MemoryBot {
    rng: GameRng,
    seen: FxHashMap<CardId, CardValue>,
}

impl MemoryBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            seen: FxHashMap::default(),
        }
    }

    /// Number of face-down cards whose value is remembered.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    fn known_partner(&self, card: &CardView, pickable: &[&CardView]) -> Option<CardId> {
        pickable
            .iter()
            .find(|c| c.id != card.id && self.seen.get(&c.id) == Some(&card.value))
            .map(|c| c.id)
    }

    fn known_pair(&self, pickable: &[&CardView]) -> Option<CardId> {
        pickable
            .iter()
            .filter(|c| self.seen.contains_key(&c.id))
            .find(|c| {
                let value = self.seen[&c.id];
                pickable
                    .iter()
                    .any(|o| o.id != c.id && self.seen.get(&o.id) == Some(&value))
            })
            .map(|c| c.id)
    }

    fn unseen(&mut self, pickable: &[&CardView]) -> Option<CardId> {
        let fresh: Vec<CardId> = pickable
            .iter()
            .filter(|c| !self.seen.contains_key(&c.id))
            .map(|c| c.id)
            .collect();

        match self.rng.choose(&fresh) {
            Some(id) => Some(*id),
            None => {
                let any: Vec<CardId> = pickable.iter().map(|c| c.id).collect();
                self.rng.choose(&any).copied()
            }
        }
    }
}

impl Picker for MemoryBot {
    fn pick(&mut self, view: &ViewModel) -> Option<CardId> {
        let pickable: Vec<&CardView> = view.pickable().collect();
        let face_up = view.cards.iter().find(|c| c.is_flipped && !c.matched);

        let known = match face_up {
            Some(first) => self.known_partner(first, &pickable),
            None => self.known_pair(&pickable),
        };

        known.or_else(|| self.unseen(&pickable))
    }

    fn observe(&mut self, view: &ViewModel) {
        for card in &view.cards {
            if card.matched {
                self.seen.remove(&card.id);
            } else if card.is_flipped {
                self.seen.insert(card.id, card.value);
            }
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameConfig, GameState, Level};
    use im::Vector;

    fn view(state: &GameState) -> ViewModel {
        let config = GameConfig::new().with_levels(vec![Level::new(1, 4)]);
        ViewModel::build(state, &config)
    }

    fn state() -> GameState {
        let deck: Vector<Card> = vec![
            Card::new(0, 1),
            Card::new(1, 1),
            Card::new(1, 2),
            Card::new(0, 2),
        ]
        .into();
        GameState::new(0, deck)
    }

    #[test]
    fn test_random_bot_picks_pickable() {
        let mut state = state();
        state.mark_matched(CardId::new(0, 1));
        state.mark_matched(CardId::new(0, 2));
        state.flipped.push(CardId::new(1, 1));

        let mut bot = RandomBot::new(1);
        assert_eq!(bot.pick(&view(&state)), Some(CardId::new(1, 2)));
    }

    #[test]
    fn test_random_bot_nothing_to_pick() {
        let mut state = state();
        state.flipped.push(CardId::new(0, 1));
        state.flipped.push(CardId::new(1, 1));

        let mut bot = RandomBot::new(1);
        assert_eq!(bot.pick(&view(&state)), None);
    }

    #[test]
    fn test_memory_bot_completes_known_partner() {
        let mut bot = MemoryBot::new(3);
        let mut state = state();

        // Saw 0-1 and 1-1 in an earlier mismatch.
        state.flipped.push(CardId::new(0, 1));
        state.flipped.push(CardId::new(1, 1));
        bot.observe(&view(&state));
        state.flipped.clear();
        assert_eq!(bot.remembered(), 2);

        // Now 0-2 is face up; its partner 0-1 is remembered.
        state.flipped.push(CardId::new(0, 2));
        assert_eq!(bot.pick(&view(&state)), Some(CardId::new(0, 1)));
    }

    #[test]
    fn test_memory_bot_opens_with_known_pair() {
        let mut bot = MemoryBot::new(3);
        let mut state = state();

        state.flipped.push(CardId::new(1, 1));
        state.flipped.push(CardId::new(0, 2));
        bot.observe(&view(&state));
        state.flipped.clear();
        state.flipped.push(CardId::new(0, 1));
        state.flipped.push(CardId::new(1, 2));
        bot.observe(&view(&state));
        state.flipped.clear();

        let pick = bot.pick(&view(&state)).unwrap();
        assert_eq!(bot.remembered(), 4);
        assert!(view(&state).card(pick).is_some());

        // Whatever it opens with, it knows the partner.
        state.flipped.push(pick);
        assert_eq!(bot.pick(&view(&state)), Some(pick.partner()));
    }

    #[test]
    fn test_memory_bot_forgets_matched_and_resets() {
        let mut bot = MemoryBot::new(3);
        let mut state = state();

        state.flipped.push(CardId::new(0, 1));
        bot.observe(&view(&state));
        assert_eq!(bot.remembered(), 1);

        state.flipped.clear();
        state.mark_matched(CardId::new(0, 1));
        state.mark_matched(CardId::new(0, 2));
        bot.observe(&view(&state));
        assert_eq!(bot.remembered(), 0);

        state.flipped.push(CardId::new(1, 1));
        bot.observe(&view(&state));
        bot.reset();
        assert_eq!(bot.remembered(), 0);
    }
}
