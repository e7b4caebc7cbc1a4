//! A single board cell: peg flag plus its precomputed jump connections.

use im::OrdMap;
use serde::Serialize;

use crate::core::Position;

/// One position on the board.
///
/// `connections` maps a destination to the position jumped over to reach it.
/// It is fixed at construction; only `pegged` differs between board values.
/// Cloning a cell is O(1) because the connection map is persistent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pegged: bool,
    connections: OrdMap<Position, Position>,
}

impl Cell {
    pub(crate) fn new(pegged: bool, connections: OrdMap<Position, Position>) -> Self {
        Self { pegged, connections }
    }

    /// True if a peg occupies this cell.
    #[must_use]
    pub fn is_pegged(&self) -> bool {
        self.pegged
    }

    /// Destination -> jumped position, for every straight line through this cell.
    #[must_use]
    pub fn connections(&self) -> &OrdMap<Position, Position> {
        &self.connections
    }

    /// The position jumped when moving from this cell to `destination`.
    #[must_use]
    pub fn mid_to(&self, destination: Position) -> Option<Position> {
        self.connections.get(&destination).copied()
    }

    pub(crate) fn set_pegged(&mut self, pegged: bool) {
        self.pegged = pegged;
    }
}
