//! The game engine store.

use std::time::Duration;

use im::Vector;
use log::{debug, info};

use crate::core::{CardId, ConfigError, GameConfig, GameRng, GameState, Level};
use crate::deck::generate_deck;
use crate::rules::{self, FlipResolution, IgnoreReason, Status};
use crate::timer::{ClearTicket, MismatchTimer};
use crate::view::ViewModel;

/// Input to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The player picked a card.
    Flip(CardId),
    /// Move on after passing a level.
    AdvanceLevel,
    /// Redeal the current level after failing it.
    RestartLevel,
    /// Advance the engine's logical clock.
    Tick(Duration),
    /// Redeem a clear ticket from an external scheduler.
    Fire(ClearTicket),
}

/// Result of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected; state unchanged.
    Ignored(IgnoreReason),
    /// First card of a move turned face up.
    Revealed(CardId),
    /// A pair was found.
    Matched { first: CardId, second: CardId },
    /// Two cards did not pair. They stay face up until `ticket` fires.
    Mismatched {
        first: CardId,
        second: CardId,
        ticket: ClearTicket,
    },
    /// A mismatched pair was turned face down.
    Cleared,
    /// A fresh deck was dealt for `level` (0-based).
    LevelStarted { level: usize },
    /// The last level was passed.
    Won,
    /// Clock advanced with nothing due.
    Idle,
}

impl Outcome {
    /// Check if the command changed nothing.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Owns a session: configuration, state, RNG and the mismatch timer.
///
/// All mutation goes through the command methods (or `dispatch`). Rejected
/// commands return `Outcome::Ignored` and never panic.
///
/// ## Example
///
/// ```
/// use memory_tiles::{GameEngine, Outcome};
///
/// let mut engine = GameEngine::with_seed(7);
/// let first = engine.state().deck[0].id;
///
/// assert_eq!(engine.flip(first), Outcome::Revealed(first));
/// assert!(engine.flip(first).is_ignored());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    timer: MismatchTimer,
}

impl GameEngine {
    /// Start a session at level 0 after validating `config`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, seed))
    }

    /// Start a session with the default level table.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::start(GameConfig::default(), seed)
    }

    fn start(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = match config.levels.get(0) {
            Some(level) => generate_deck(level, config.deck_rule, &mut rng),
            None => Vector::new(),
        };
        info!("session started, seed = {seed}, {} levels", config.levels.len());

        Self {
            config,
            state: GameState::new(0, deck),
            rng,
            timer: MismatchTimer::new(),
        }
    }

    // === Queries ===

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Current level, `None` once won.
    #[must_use]
    pub fn level(&self) -> Option<&Level> {
        self.config.levels.get(self.state.level_index)
    }

    /// Session status.
    #[must_use]
    pub fn status(&self) -> Status {
        rules::evaluate(&self.state, &self.config.levels)
    }

    /// Clear scheduled for the current mismatch, if any.
    #[must_use]
    pub fn pending_clear(&self) -> Option<ClearTicket> {
        self.timer.pending()
    }

    /// Logical clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timer.now()
    }

    /// Derived view data for presentation.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel::build(&self.state, &self.config)
    }

    // === Commands ===

    /// Apply any command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::Flip(id) => self.flip(id),
            Command::AdvanceLevel => self.advance_level(),
            Command::RestartLevel => self.restart_level(),
            Command::Tick(elapsed) => self.tick(elapsed),
            Command::Fire(ticket) => self.fire(ticket),
        }
    }

    /// Pick card `id`.
    pub fn flip(&mut self, id: CardId) -> Outcome {
        if self.status().is_terminal() {
            return self.ignore("flip", IgnoreReason::GameWon);
        }

        match rules::apply_flip(&mut self.state, id) {
            FlipResolution::Ignored(reason) => self.ignore("flip", reason),
            FlipResolution::Revealed(id) => Outcome::Revealed(id),
            FlipResolution::Matched { first, second } => {
                if self.state.is_done() {
                    info!(
                        "level {} cleared in {} moves: {:?}",
                        self.state.level_index,
                        self.state.moves,
                        self.status()
                    );
                }
                Outcome::Matched { first, second }
            }
            FlipResolution::Mismatched { first, second } => {
                let ticket = self
                    .timer
                    .schedule(self.state.generation, self.config.mismatch_delay());
                Outcome::Mismatched {
                    first,
                    second,
                    ticket,
                }
            }
        }
    }

    /// Deal the next level. Only valid in `Status::LevelPassed`.
    pub fn advance_level(&mut self) -> Outcome {
        match self.status() {
            Status::LevelPassed => self.deal(self.state.level_index + 1),
            Status::Won => self.ignore("advance_level", IgnoreReason::GameWon),
            _ => self.ignore("advance_level", IgnoreReason::NotPassed),
        }
    }

    /// Redeal the current level with a new shuffle. Only valid in
    /// `Status::LevelFailed`.
    pub fn restart_level(&mut self) -> Outcome {
        match self.status() {
            Status::LevelFailed => self.deal(self.state.level_index),
            Status::Won => self.ignore("restart_level", IgnoreReason::GameWon),
            _ => self.ignore("restart_level", IgnoreReason::NotFailed),
        }
    }

    /// Advance the logical clock, firing the mismatch clear if it is due.
    pub fn tick(&mut self, elapsed: Duration) -> Outcome {
        match self.timer.advance(elapsed) {
            Some(ticket) => self.clear(ticket),
            None => Outcome::Idle,
        }
    }

    /// Fire a clear ticket from an external scheduler.
    pub fn fire(&mut self, ticket: ClearTicket) -> Outcome {
        if !self.timer.redeem(ticket) {
            return self.ignore("fire", IgnoreReason::StaleTicket);
        }
        self.clear(ticket)
    }

    // === Internals ===

    fn clear(&mut self, ticket: ClearTicket) -> Outcome {
        if ticket.generation != self.state.generation {
            return self.ignore("clear", IgnoreReason::StaleTicket);
        }
        if rules::clear_mismatch(&mut self.state) {
            Outcome::Cleared
        } else {
            self.ignore("clear", IgnoreReason::StaleTicket)
        }
    }

    fn deal(&mut self, level_index: usize) -> Outcome {
        if let Some(stale) = self.timer.cancel() {
            debug!("cancelled pending clear {stale:?}");
        }

        match self.config.levels.get(level_index) {
            Some(level) => {
                let deck = generate_deck(level, self.config.deck_rule, &mut self.rng);
                let restart = level_index == self.state.level_index;
                self.state.deal(level_index, deck);
                info!(
                    "{} level {level_index}: {} cards, budget {}",
                    if restart { "restarted" } else { "started" },
                    self.state.deck.len(),
                    level.move_budget
                );
                Outcome::LevelStarted { level: level_index }
            }
            None => {
                self.state.deal(level_index, Vector::new());
                info!("all {} levels cleared", self.config.levels.len());
                Outcome::Won
            }
        }
    }

    fn ignore(&self, command: &str, reason: IgnoreReason) -> Outcome {
        debug!("{command} ignored: {reason:?}");
        Outcome::Ignored(reason)
    }
}
