//! Error types.
//!
//! Only board construction can fail hard. Illegal moves are ordinary,
//! recoverable values so a caller's loop can re-prompt without special cases.

use super::position::Position;

/// Errors raised while constructing or preparing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("row count must be between 1 and {max}, got {0}", max = crate::board::MAX_ROW_COUNT)]
    InvalidRowCount(u32),

    #[error("position {position} is outside the board (1..={max})")]
    PositionOutOfRange { position: Position, max: u32 },
}

/// Errors raised when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move from {from} to {to}")]
    InvalidMove { from: Position, to: Position },
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
