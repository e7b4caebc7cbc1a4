//! Board construction.
//!
//! Every position gets three candidate jumps, each a straight line of three
//! positions starting at it:
//!
//! - **Right**: `p -> p + 2` over `p + 1`, only if neither `p` nor `p + 1`
//!   ends its row (otherwise the line would wrap onto the next row)
//! - **Down-left**: over `p + r`, landing on `p + 2r + 1`
//! - **Down-right**: over `p + r + 1`, landing on `p + 2r + 3`
//!
//! where `r` is the row of `p`. Candidates landing past the last position
//! are dropped. Each surviving line is recorded at both ends, which is all
//! the up/left directions amount to.

use im::OrdMap;
use smallvec::SmallVec;
use tracing::debug;

use super::cell::Cell;
use super::grid::Board;
use super::MAX_ROW_COUNT;
use crate::core::triangular::triangular;
use crate::core::{BoardError, Position};

/// Build a fully pegged board with `row_count` rows.
///
/// ```
/// use peg_solitaire::board::build;
/// use peg_solitaire::core::Position;
///
/// let board = build(5).unwrap();
/// assert_eq!(board.peg_count(), 15);
/// assert_eq!(board.cell(Position(1)).unwrap().mid_to(Position(4)), Some(Position(2)));
///
/// assert!(build(0).is_err());
/// ```
pub fn build(row_count: u32) -> Result<Board, BoardError> {
    if row_count == 0 || row_count > MAX_ROW_COUNT {
        return Err(BoardError::InvalidRowCount(row_count));
    }

    let max_pos = u32::try_from(triangular(u64::from(row_count)))
        .map_err(|_| BoardError::InvalidRowCount(row_count))?;
    let mut connections: Vec<OrdMap<Position, Position>> = vec![OrdMap::new(); max_pos as usize];
    let mut lines = 0usize;

    for from in (1..=max_pos).map(Position) {
        for (mid, to) in candidate_jumps(from) {
            if to.raw() > max_pos {
                continue;
            }
            let (Some(i), Some(j)) = (from.index(), to.index()) else {
                continue;
            };
            connections[i].insert(to, mid);
            connections[j].insert(from, mid);
            lines += 1;
        }
    }

    let cells: OrdMap<Position, Cell> = (1..=max_pos)
        .map(Position)
        .zip(connections)
        .map(|(pos, conns)| (pos, Cell::new(true, conns)))
        .collect();

    debug!(row_count, positions = max_pos, lines, "built board");
    Ok(Board::from_cells(row_count, cells))
}

/// `(mid, destination)` for each straight line starting at `p`, unbounded below.
fn candidate_jumps(p: Position) -> SmallVec<[(Position, Position); 3]> {
    let mut out = SmallVec::new();
    let n = p.raw();

    if !p.is_row_end() && !Position(n + 1).is_row_end() {
        out.push((Position(n + 1), Position(n + 2)));
    }

    let r = p.row();
    let down_left = n + r;
    out.push((Position(down_left), Position(down_left + r + 1)));
    let down_right = n + r + 1;
    out.push((Position(down_right), Position(down_right + r + 2)));

    out
}
