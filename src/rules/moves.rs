//! Move legality and application.
//!
//! All functions are pure: they read a `Board` and, for `apply_move`, return
//! a new one. A jump from `from` to `to` is legal when the two are joined by
//! a connection, `from` and the jumped position hold pegs, and `to` is empty.

use im::OrdMap;
use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Jump, MoveError, Position};

/// Legal destinations from `pos`, mapped to the position each one jumps.
///
/// Empty if `pos` is off the board or holds no peg.
///
/// ```
/// use peg_solitaire::board::build;
/// use peg_solitaire::core::Position;
/// use peg_solitaire::rules::legal_moves;
///
/// let board = build(5).unwrap().with_hole(Position(4)).unwrap();
/// let moves = legal_moves(&board, Position(1));
/// assert_eq!(moves.get(&Position(4)), Some(&Position(2)));
/// assert_eq!(moves.len(), 1);
/// ```
#[must_use]
pub fn legal_moves(board: &Board, pos: Position) -> OrdMap<Position, Position> {
    let Some(cell) = board.cell(pos).filter(|cell| cell.is_pegged()) else {
        return OrdMap::new();
    };

    cell.connections()
        .iter()
        .filter(|(to, mid)| !board.is_pegged(**to) && board.is_pegged(**mid))
        .map(|(to, mid)| (*to, *mid))
        .collect()
}

/// The position jumped by moving `from -> to`, or `None` if that is not legal.
#[must_use]
pub fn check_move(board: &Board, from: Position, to: Position) -> Option<Position> {
    let cell = board.cell(from).filter(|cell| cell.is_pegged())?;
    let mid = cell.mid_to(to)?;
    (!board.is_pegged(to) && board.is_pegged(mid)).then_some(mid)
}

/// Apply the jump `from -> to`, returning the resulting board.
///
/// The input board is untouched.
pub fn apply_move(board: &Board, from: Position, to: Position) -> Result<Board, MoveError> {
    let Some(mid) = check_move(board, from, to) else {
        trace!(%from, %to, "rejected move");
        return Err(MoveError::InvalidMove { from, to });
    };

    let mut next = board.clone();
    next.set_pegged(from, false);
    next.set_pegged(mid, false);
    next.set_pegged(to, true);

    debug!(%from, over = %mid, %to, pegs = next.peg_count(), "applied move");
    Ok(next)
}

/// True if any pegged position has a legal jump.
///
/// Stops at the first position that has one.
#[must_use]
pub fn any_move_available(board: &Board) -> bool {
    board.pegged_positions().any(|pos| has_move_from(board, pos))
}

/// Every legal jump on the board, ordered by origin then destination.
#[must_use]
pub fn all_jumps(board: &Board) -> Vec<Jump> {
    board
        .pegged_positions()
        .flat_map(|from| {
            legal_moves(board, from)
                .into_iter()
                .map(move |(to, over)| Jump::new(from, over, to))
        })
        .collect()
}

fn has_move_from(board: &Board, pos: Position) -> bool {
    board.cell(pos).is_some_and(|cell| {
        cell.connections()
            .iter()
            .any(|(to, mid)| !board.is_pegged(*to) && board.is_pegged(*mid))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::build;

    fn classic() -> Board {
        build(5).unwrap().with_hole(Position(4)).unwrap()
    }

    #[test]
    fn test_legal_moves_into_hole() {
        let board = classic();

        let from_1 = legal_moves(&board, Position(1));
        assert_eq!(from_1.get(&Position(4)), Some(&Position(2)));
        assert!(from_1.keys().all(|to| !board.is_pegged(*to)));

        let from_6 = legal_moves(&board, Position(6));
        assert_eq!(from_6.get(&Position(4)), Some(&Position(5)));

        let from_11 = legal_moves(&board, Position(11));
        assert_eq!(from_11.get(&Position(4)), Some(&Position(7)));

        let from_13 = legal_moves(&board, Position(13));
        assert_eq!(from_13.get(&Position(4)), Some(&Position(8)));

        assert!(legal_moves(&board, Position(2)).is_empty());
    }

    #[test]
    fn test_legal_moves_empty_or_invalid_origin() {
        let board = classic();
        assert!(legal_moves(&board, Position(4)).is_empty());
        assert!(legal_moves(&board, Position(0)).is_empty());
        assert!(legal_moves(&board, Position(99)).is_empty());
    }

    #[test]
    fn test_all_jumps_classic() {
        let jumps = all_jumps(&classic());
        let froms: Vec<u32> = jumps.iter().map(|j| j.from.raw()).collect();
        assert_eq!(froms, vec![1, 6, 11, 13]);
        assert!(jumps.iter().all(|j| j.to == Position(4)));
    }

    #[test]
    fn test_check_move() {
        let board = classic();
        assert_eq!(check_move(&board, Position(1), Position(4)), Some(Position(2)));
        assert_eq!(check_move(&board, Position(1), Position(6)), None);
        assert_eq!(check_move(&board, Position(4), Position(1)), None);
        assert_eq!(check_move(&board, Position(1), Position(1)), None);
        assert_eq!(check_move(&board, Position(20), Position(4)), None);
    }

    #[test]
    fn test_apply_move() {
        let board = classic();
        let next = apply_move(&board, Position(1), Position(4)).unwrap();

        assert!(!next.is_pegged(Position(1)));
        assert!(!next.is_pegged(Position(2)));
        assert!(next.is_pegged(Position(4)));
        assert_eq!(next.peg_count(), board.peg_count() - 1);

        // Input untouched
        assert!(board.is_pegged(Position(1)));
        assert!(board.is_pegged(Position(2)));
        assert!(!board.is_pegged(Position(4)));
    }

    #[test]
    fn test_apply_move_rejected() {
        let board = classic();
        assert_eq!(
            apply_move(&board, Position(2), Position(4)),
            Err(MoveError::InvalidMove {
                from: Position(2),
                to: Position(4),
            })
        );
    }

    #[test]
    fn test_any_move_available() {
        let fresh = build(5).unwrap();
        assert!(!any_move_available(&fresh));
        assert!(any_move_available(&classic()));

        // Single peg left.
        let mut lone = build(3).unwrap();
        for p in 2..=6 {
            lone = lone.with_hole(Position(p)).unwrap();
        }
        assert_eq!(lone.peg_count(), 1);
        assert!(!any_move_available(&lone));
    }
}
