//! Board values.
//!
//! A `Board` is never mutated once handed out. Every move produces a new
//! value; older values stay valid, so a caller can keep them for undo or
//! replay. Cells live in an `im::OrdMap`, so cloning is O(1) and a move only
//! copies the few tree nodes it touches.

use im::OrdMap;
use serde::Serialize;
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::triangular::{row_end, row_start};
use crate::core::{BoardError, Position};

/// Compact bitset of pegged positions (bit `p - 1` set when `p` is pegged).
///
/// Boards up to 256 positions stay inline.
pub type PegKey = SmallVec<[u64; 4]>;

/// A triangular peg-solitaire board.
///
/// Serializable for presenters and logs. There is no `Deserialize`: a board
/// only comes from `build`, which guarantees its connections are sound.
///
/// ```compile_fail
/// let board: peg_solitaire::board::Board = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    row_count: u32,
    cells: OrdMap<Position, Cell>,
}

impl Board {
    pub(crate) fn from_cells(row_count: u32, cells: OrdMap<Position, Cell>) -> Self {
        Self { row_count, cells }
    }

    /// Number of rows, fixed at construction.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Highest position number on this board.
    #[must_use]
    pub fn max_position(&self) -> u32 {
        // row_count <= MAX_ROW_COUNT, so the cell count fits.
        self.cells.len() as u32
    }

    /// True if `pos` is on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Get the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    /// True if `pos` is on the board and holds a peg.
    #[must_use]
    pub fn is_pegged(&self, pos: Position) -> bool {
        self.cells.get(&pos).is_some_and(Cell::is_pegged)
    }

    /// Iterate over all positions in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys().copied()
    }

    /// Iterate over pegged positions in increasing order.
    pub fn pegged_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_pegged())
            .map(|(pos, _)| *pos)
    }

    /// Number of pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_pegged()).count()
    }

    /// Row-grouped `(position, pegged)` listing, top row first.
    ///
    /// This is everything a presenter needs to draw the board.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(Position, bool)>> + '_ {
        (1..=u64::from(self.row_count)).map(move |row| {
            (row_start(row)..=row_end(row))
                .map(|p| {
                    let pos = Position(p as u32);
                    (pos, self.is_pegged(pos))
                })
                .collect()
        })
    }

    /// A copy of this board with the peg at `pos` removed.
    ///
    /// This is the initial-hole designation made before play starts. It is
    /// unconditional: removing from an empty cell yields an equal board.
    pub fn with_hole(&self, pos: Position) -> Result<Board, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::PositionOutOfRange {
                position: pos,
                max: self.max_position(),
            });
        }
        let mut next = self.clone();
        next.set_pegged(pos, false);
        Ok(next)
    }

    /// Bitset of pegged positions, usable as a hash key.
    #[must_use]
    pub fn peg_key(&self) -> PegKey {
        let words = (self.cells.len() + 63) / 64;
        let mut key: PegKey = SmallVec::from_elem(0, words);
        for bit in self.pegged_positions().filter_map(Position::index) {
            if let Some(word) = key.get_mut(bit / 64) {
                *word |= 1u64 << (bit % 64);
            }
        }
        key
    }

    /// Set the peg flag on this value. Only called on fresh clones.
    pub(crate) fn set_pegged(&mut self, pos: Position, pegged: bool) {
        if let Some(cell) = self.cells.get_mut(&pos) {
            cell.set_pegged(pegged);
        }
    }
}

#[cfg(test)]
mod tests {
    use im::OrdMap;

    use crate::board::{build, Cell};
    use crate::core::{BoardError, Position};

    #[test]
    fn test_accessors() {
        let board = build(4).unwrap();

        assert_eq!(board.row_count(), 4);
        assert_eq!(board.max_position(), 10);
        assert!(board.contains(Position(10)));
        assert!(!board.contains(Position(11)));
        assert!(!board.contains(Position(0)));
        assert!(board.is_pegged(Position(1)));
        assert!(!board.is_pegged(Position(11)));
        assert_eq!(board.peg_count(), 10);
        assert_eq!(board.positions().count(), 10);
    }

    #[test]
    fn test_with_hole_returns_new_value() {
        let board = build(5).unwrap();
        let holed = board.with_hole(Position(4)).unwrap();

        assert!(board.is_pegged(Position(4)));
        assert!(!holed.is_pegged(Position(4)));
        assert_eq!(holed.peg_count(), 14);
        assert_eq!(holed.pegged_positions().count(), 14);

        // Unconditional: removing twice is harmless.
        let again = holed.with_hole(Position(4)).unwrap();
        assert_eq!(again, holed);
    }

    #[test]
    fn test_with_hole_out_of_range() {
        let board = build(3).unwrap();
        assert_eq!(
            board.with_hole(Position(7)),
            Err(BoardError::PositionOutOfRange {
                position: Position(7),
                max: 6,
            })
        );
        assert!(board.with_hole(Position(0)).is_err());
    }

    #[test]
    fn test_rows() {
        let board = build(3).unwrap().with_hole(Position(5)).unwrap();
        let rows: Vec<_> = board.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![(Position(1), true)]);
        assert_eq!(rows[1], vec![(Position(2), true), (Position(3), true)]);
        assert_eq!(
            rows[2],
            vec![(Position(4), true), (Position(5), false), (Position(6), true)]
        );
    }

    #[test]
    fn test_peg_key() {
        let board = build(5).unwrap();
        assert_eq!(board.peg_key().as_slice(), &[0x7FFF]);

        let holed = board.with_hole(Position(1)).unwrap();
        assert_eq!(holed.peg_key().as_slice(), &[0x7FFE]);
        assert_ne!(board.peg_key(), holed.peg_key());
    }

    #[test]
    fn test_peg_key_spans_words() {
        // 12 rows = 78 positions = two words.
        let board = build(12).unwrap().with_hole(Position(65)).unwrap();
        let key = board.peg_key();
        assert_eq!(key.len(), 2);
        assert_eq!(key[0], u64::MAX);
        assert_eq!(key[1], (1u64 << 14) - 1 - 1);
    }

    #[test]
    fn test_serialization() {
        let board = build(3).unwrap().with_hole(Position(2)).unwrap();
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["row_count"], 3);
        assert_eq!(json["cells"]["2"]["pegged"], false);
        assert_eq!(json["cells"]["1"]["connections"]["4"], 2);
    }

    #[test]
    fn test_peg_key_ignores_positions_off_the_bitset() {
        let cells: OrdMap<Position, Cell> = [
            (Position(0), Cell::new(true, OrdMap::new())),
            (Position(2), Cell::new(true, OrdMap::new())),
            (Position(200), Cell::new(true, OrdMap::new())),
        ]
        .into_iter()
        .collect();
        let board = super::Board::from_cells(3, cells);

        assert_eq!(board.peg_key().as_slice(), &[0b10]);
    }
}
