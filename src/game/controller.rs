//! Turn sequencing over board values.
//!
//! The controller holds no state of its own; the caller's loop keeps the
//! current `Board` and branches on each `MoveOutcome`.

use tracing::info;

use crate::board::{self, Board};
use crate::core::{BoardError, Position};
use crate::rules::{any_move_available, apply_move};

/// Result of submitting a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move applied; play continues.
    Applied(Board),
    /// Move was not legal. The caller's board is unchanged.
    Rejected,
    /// Move applied and no jump remains. Carries the remaining peg count.
    GameOver(Board, usize),
}

impl MoveOutcome {
    /// The new board, if the move was applied.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        match self {
            MoveOutcome::Applied(board) | MoveOutcome::GameOver(board, _) => Some(board),
            MoveOutcome::Rejected => None,
        }
    }

    /// Check if this outcome ends the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver(..))
    }
}

/// Build a fresh, fully pegged board for a new game.
pub fn start(row_count: u32) -> Result<Board, BoardError> {
    board::build(row_count)
}

/// Designate the initial hole before the first move.
pub fn remove_initial_peg(board: &Board, pos: Position) -> Result<Board, BoardError> {
    board.with_hole(pos)
}

/// Attempt the jump `from -> to` on `board`.
///
/// ```
/// use peg_solitaire::core::Position;
/// use peg_solitaire::game::{remove_initial_peg, start, submit_move, MoveOutcome};
///
/// let board = remove_initial_peg(&start(5).unwrap(), Position(4)).unwrap();
/// assert!(matches!(submit_move(&board, Position(1), Position(4)), MoveOutcome::Applied(_)));
/// assert_eq!(submit_move(&board, Position(4), Position(4)), MoveOutcome::Rejected);
/// ```
#[must_use]
pub fn submit_move(board: &Board, from: Position, to: Position) -> MoveOutcome {
    match apply_move(board, from, to) {
        Ok(next) if any_move_available(&next) => MoveOutcome::Applied(next),
        Ok(next) => {
            let remaining = next.peg_count();
            info!(remaining, "game over");
            MoveOutcome::GameOver(next, remaining)
        }
        Err(_) => MoveOutcome::Rejected,
    }
}
