//! A game session: the caller-side loop state around the controller.
//!
//! `Game` keeps the current board, the phase, and every board it has
//! replaced. Boards are persistent values, so the history costs only the
//! cells each move touched, and `undo` is a pop.
//!
//! ```
//! use peg_solitaire::core::{GameConfig, Position};
//! use peg_solitaire::game::{Game, GamePhase, MoveOutcome};
//!
//! let mut game = Game::new(&GameConfig::new(5).with_initial_hole(Position(4))).unwrap();
//! assert_eq!(game.phase(), GamePhase::InitialHoleRemoved);
//!
//! assert!(matches!(game.play(Position(1), Position(4)), MoveOutcome::Applied(_)));
//! assert_eq!(game.remaining_pegs(), 13);
//!
//! game.undo();
//! assert_eq!(game.remaining_pegs(), 14);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::controller::{self, MoveOutcome};
use crate::board::Board;
use crate::core::{BoardError, ConfigError, GameConfig, Jump, MoveRecord, Position};
use crate::rules::{all_jumps, any_move_available, check_move};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// All positions pegged.
    Fresh,
    /// One peg removed; no move made yet.
    InitialHoleRemoved,
    /// At least one move applied and more are available.
    InPlay,
    /// No jump remains. Start a new game to continue.
    Terminal,
}

/// Errors from session operations that are not moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("operation not allowed in phase {0:?}")]
    WrongPhase(GamePhase),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    phase: GamePhase,
    /// Board before each applied move, with that move.
    history: Vector<(Board, MoveRecord)>,
}

impl Game {
    /// Start a game from configuration.
    ///
    /// If the config names an initial hole it is removed immediately.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            board: controller::start(config.row_count)?,
            phase: GamePhase::Fresh,
            history: Vector::new(),
        };

        if let Some(hole) = config.initial_hole {
            game.remove_peg(hole).map_err(|err| match err {
                SessionError::Board(err) => ConfigError::Board(err),
                SessionError::WrongPhase(phase) => {
                    ConfigError::Validation(format!("unexpected phase {phase:?}"))
                }
            })?;
        }

        Ok(game)
    }

    /// Remove the initial peg. Only allowed on a fresh board.
    pub fn remove_peg(&mut self, pos: Position) -> Result<(), SessionError> {
        if self.phase != GamePhase::Fresh {
            return Err(SessionError::WrongPhase(self.phase));
        }

        self.board = controller::remove_initial_peg(&self.board, pos)?;
        self.phase = if any_move_available(&self.board) {
            GamePhase::InitialHoleRemoved
        } else {
            info!(remaining = self.board.peg_count(), "game over before first move");
            GamePhase::Terminal
        };
        debug!(hole = %pos, phase = ?self.phase, "initial hole removed");
        Ok(())
    }

    /// Attempt the jump `from -> to`.
    ///
    /// Rejected outside of play (before the hole is chosen, or once terminal).
    pub fn play(&mut self, from: Position, to: Position) -> MoveOutcome {
        if !matches!(self.phase, GamePhase::InitialHoleRemoved | GamePhase::InPlay) {
            return MoveOutcome::Rejected;
        }

        let Some(over) = check_move(&self.board, from, to) else {
            return MoveOutcome::Rejected;
        };

        let outcome = controller::submit_move(&self.board, from, to);
        let (next, phase) = match &outcome {
            MoveOutcome::Applied(next) => (next.clone(), GamePhase::InPlay),
            MoveOutcome::GameOver(next, _) => (next.clone(), GamePhase::Terminal),
            MoveOutcome::Rejected => return MoveOutcome::Rejected,
        };

        let record = MoveRecord {
            jump: Jump::new(from, over, to),
            turn: self.history.len() as u32 + 1,
        };

        let previous = std::mem::replace(&mut self.board, next);
        self.history.push_back((previous, record));
        self.phase = phase;
        outcome
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let (board, record) = self.history.pop_back()?;
        self.board = board;
        self.phase = if self.history.is_empty() {
            GamePhase::InitialHoleRemoved
        } else {
            GamePhase::InPlay
        };
        debug!(turn = record.turn, "undid move");
        Some(record)
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if no further moves can be made.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Terminal
    }

    /// Pegs on the current board.
    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        self.board.peg_count()
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.history.iter().map(|(_, record)| record)
    }

    /// Legal jumps on the current board (empty unless in play).
    #[must_use]
    pub fn jumps(&self) -> Vec<Jump> {
        match self.phase {
            GamePhase::InitialHoleRemoved | GamePhase::InPlay => all_jumps(&self.board),
            GamePhase::Fresh | GamePhase::Terminal => Vec::new(),
        }
    }
}
