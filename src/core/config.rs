//! Game and solver configuration.
//!
//! - `GameConfig`: board size and the initial hole
//! - `SolverConfig`: search target and node budget
//!
//! Both are plain builder-style values; `validate` reports problems as
//! `ConfigError` rather than panicking.

use serde::{Deserialize, Serialize};

use super::error::{BoardError, ConfigError};
use super::position::Position;
use super::triangular::triangular;
use crate::board::MAX_ROW_COUNT;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows in the triangle (1..=`MAX_ROW_COUNT`).
    pub row_count: u32,

    /// Position left empty before the first move. `None` leaves the choice
    /// to the caller (see `Game::remove_peg`).
    pub initial_hole: Option<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            row_count: 5,
            initial_hole: Some(Position::new(1)),
        }
    }
}

impl GameConfig {
    /// Create a configuration for `row_count` rows with no hole chosen yet.
    pub fn new(row_count: u32) -> Self {
        Self {
            row_count,
            initial_hole: None,
        }
    }

    /// Set the initial hole.
    #[must_use]
    pub fn with_initial_hole(mut self, hole: Position) -> Self {
        self.initial_hole = Some(hole);
        self
    }

    /// Highest position on a board of this size.
    #[must_use]
    pub fn max_position(&self) -> u32 {
        u32::try_from(triangular(u64::from(self.row_count))).unwrap_or(u32::MAX)
    }

    /// Check the row count and hole against each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_count == 0 || self.row_count > MAX_ROW_COUNT {
            return Err(BoardError::InvalidRowCount(self.row_count).into());
        }
        if let Some(hole) = self.initial_hole {
            let max = self.max_position();
            if hole.raw() == 0 || hole.raw() > max {
                return Err(BoardError::PositionOutOfRange {
                    position: hole,
                    max,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Solver parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Stop once the board has at most this many pegs.
    pub target_pegs: usize,

    /// Maximum boards to expand before giving up.
    /// Prevents runaway searches on large triangles.
    pub max_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target_pegs: 1,
            max_nodes: 1_000_000,
        }
    }
}

impl SolverConfig {
    /// Set the peg count that counts as solved.
    #[must_use]
    pub fn with_target_pegs(mut self, target: usize) -> Self {
        self.target_pegs = target;
        self
    }

    /// Set the node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }

    /// Reject a zero target: a board always keeps at least one peg.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_pegs == 0 {
            return Err(ConfigError::Validation(
                "target_pegs must be at least 1".to_string(),
            ));
        }
        if self.max_nodes == 0 {
            return Err(ConfigError::Validation("max_nodes must be > 0".to_string()));
        }
        Ok(())
    }
}
