//! # peg-solitaire
//!
//! A triangular peg-solitaire engine.
//!
//! ## Design Principles
//!
//! 1. **Derived geometry**: Positions are plain 1-based numbers. Rows and
//!    jump lines come from triangular-number arithmetic, never coordinates.
//!
//! 2. **Value semantics**: A `Board` is never mutated once handed out. Every
//!    move returns a new board; old ones stay valid for undo and replay.
//!
//! 3. **No I/O**: Rendering and input parsing belong to the caller. The
//!    engine takes positions and returns boards and outcomes.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board cloning via `im-rs`, with
//!   untouched cells shared between successive boards.
//!
//! - **Recoverable moves**: Illegal moves are `MoveOutcome::Rejected`, not
//!   errors the caller must special-case.
//!
//! ## Modules
//!
//! - `core`: Positions, triangular arithmetic, errors, configuration, RNG
//! - `board`: Cells, boards, and the board builder
//! - `rules`: Move legality and application
//! - `game`: Turn controller and game sessions
//! - `search`: Playout policies and a solver

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BoardError, ConfigError, GameConfig, GameRng, Jump, MoveError, MoveRecord, Position,
    SolverConfig,
};

pub use crate::board::{build, Board, Cell, PegKey, MAX_ROW_COUNT};

pub use crate::rules::{all_jumps, any_move_available, apply_move, check_move, legal_moves};

pub use crate::game::{
    remove_initial_peg, start, submit_move, Game, GamePhase, MoveOutcome, SessionError,
};

pub use crate::search::{
    playout, FirstJump, MovePolicy, Playout, RandomJump, Solution, Solver, SolverStats,
};
