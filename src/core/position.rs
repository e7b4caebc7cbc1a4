//! Position identification and resolved jumps.
//!
//! A `Position` is a 1-based number with no stored coordinates. Its row is
//! derived from the triangular numbering (see [`crate::core::triangular`]).
//!
//! ```
//! use peg_solitaire::core::Position;
//!
//! let p = Position::new(5);
//! assert_eq!(p.row(), 3);
//! assert_eq!(p.to_string(), "5");
//! ```

use serde::{Deserialize, Serialize};

use super::triangular;

/// A 1-based position on a triangular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u32);

impl Position {
    /// Create a position from its number.
    #[must_use]
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// Get the raw position number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Zero-based index, for dense storage. Position 0 has no index.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }

    /// The 1-based row this position lies in.
    #[must_use]
    pub fn row(self) -> u32 {
        triangular::row_of(u64::from(self.0)) as u32
    }

    /// True if this position ends its row.
    #[must_use]
    pub fn is_row_end(self) -> bool {
        triangular::is_triangular(u64::from(self.0))
    }
}

impl From<u32> for Position {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully resolved jump: the peg at `from` jumps `over` into `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: Position,
    pub over: Position,
    pub to: Position,
}

impl Jump {
    #[must_use]
    pub const fn new(from: Position, over: Position, to: Position) -> Self {
        Self { from, over, to }
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (over {})", self.from, self.to, self.over)
    }
}

/// A jump as recorded in a session's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The applied jump.
    pub jump: Jump,
    /// Turn number (starts at 1).
    pub turn: u32,
}
