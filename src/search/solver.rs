//! Depth-first solver.
//!
//! Searches for a jump sequence that leaves at most `target_pegs` pegs.
//! Boards are deduplicated by their peg bitset, so each reachable peg
//! configuration is expanded once. The search uses an explicit stack; long
//! games never grow the call stack.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, PegKey};
use crate::core::{ConfigError, Jump, SolverConfig};
use crate::rules::{all_jumps, apply_move};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverStats {
    /// Boards expanded (legal jumps enumerated).
    pub nodes_expanded: usize,

    /// Boards skipped because their peg set was already seen.
    pub duplicates: usize,

    /// Longest jump sequence explored.
    pub max_depth: usize,

    /// True if the search stopped on `max_nodes` rather than exhausting.
    pub budget_exhausted: bool,
}

/// A jump sequence reaching the target peg count.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Jumps in play order.
    pub jumps: Vec<Jump>,
    /// The board after the last jump.
    pub final_board: Board,
}

struct Frame {
    board: Board,
    jumps: Vec<Jump>,
    next: usize,
}

/// Peg-solitaire solver.
///
/// ```
/// use peg_solitaire::board::build;
/// use peg_solitaire::core::{Position, SolverConfig};
/// use peg_solitaire::search::Solver;
///
/// let board = build(5).unwrap().with_hole(Position(1)).unwrap();
/// let mut solver = Solver::new(SolverConfig::default()).unwrap();
/// let solution = solver.solve(&board).unwrap();
/// assert_eq!(solution.jumps.len(), 13);
/// assert_eq!(solution.final_board.peg_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
    stats: SolverStats,
}

impl Solver {
    /// Create a solver, rejecting a config that could never succeed.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SolverStats::default(),
        })
    }

    /// The solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Statistics from the most recent `solve`.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Search for a sequence from `board` down to `target_pegs`.
    ///
    /// Returns `None` if none exists or the node budget ran out; check
    /// `stats().budget_exhausted` to tell the two apart.
    pub fn solve(&mut self, board: &Board) -> Option<Solution> {
        self.stats = SolverStats::default();
        let target = self.config.target_pegs;

        if board.peg_count() <= target {
            return Some(Solution {
                jumps: Vec::new(),
                final_board: board.clone(),
            });
        }

        let mut visited: FxHashSet<PegKey> = FxHashSet::default();
        visited.insert(board.peg_key());

        let mut stack = vec![Frame {
            board: board.clone(),
            jumps: all_jumps(board),
            next: 0,
        }];
        let mut path: Vec<Jump> = Vec::new();
        self.stats.nodes_expanded = 1;

        while let Some(frame) = stack.last_mut() {
            let Some(&jump) = frame.jumps.get(frame.next) else {
                stack.pop();
                path.pop();
                continue;
            };
            frame.next += 1;

            let Ok(next) = apply_move(&frame.board, jump.from, jump.to) else {
                continue;
            };
            if !visited.insert(next.peg_key()) {
                self.stats.duplicates += 1;
                continue;
            }

            path.push(jump);
            self.stats.max_depth = self.stats.max_depth.max(path.len());

            if next.peg_count() <= target {
                debug!(jumps = path.len(), nodes = self.stats.nodes_expanded, "solved");
                return Some(Solution {
                    jumps: path,
                    final_board: next,
                });
            }

            if self.stats.nodes_expanded >= self.config.max_nodes {
                self.stats.budget_exhausted = true;
                debug!(nodes = self.stats.nodes_expanded, "solver budget exhausted");
                return None;
            }

            self.stats.nodes_expanded += 1;
            let jumps = all_jumps(&next);
            stack.push(Frame {
                board: next,
                jumps,
                next: 0,
            });
        }

        debug!(nodes = self.stats.nodes_expanded, "no solution");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::build;
    use crate::core::Position;
    use crate::game::{submit_move, MoveOutcome};

    #[test]
    fn test_already_at_target() {
        let mut board = build(2).unwrap();
        board = board.with_hole(Position(1)).unwrap();
        board = board.with_hole(Position(2)).unwrap();

        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        let solution = solver.solve(&board).unwrap();
        assert!(solution.jumps.is_empty());
    }

    #[test]
    fn test_three_rows_cannot_reach_one_peg() {
        let board = build(3).unwrap().with_hole(Position(4)).unwrap();

        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        assert!(solver.solve(&board).is_none());
        assert!(!solver.stats().budget_exhausted);

        let mut solver = Solver::new(SolverConfig::default().with_target_pegs(2)).unwrap();
        let solution = solver.solve(&board).unwrap();
        assert_eq!(solution.jumps.len(), 3);
        assert_eq!(solution.final_board.peg_count(), 2);
    }

    #[test]
    fn test_classic_solution_replays() {
        let start = build(5).unwrap().with_hole(Position(1)).unwrap();
        let mut solver = Solver::new(SolverConfig::default()).unwrap();
        let solution = solver.solve(&start).unwrap();

        let mut board = start;
        let last = solution.jumps.len() - 1;
        for (i, jump) in solution.jumps.iter().enumerate() {
            match submit_move(&board, jump.from, jump.to) {
                MoveOutcome::Applied(next) => board = next,
                MoveOutcome::GameOver(next, remaining) => {
                    assert_eq!(i, last);
                    assert_eq!(remaining, 1);
                    board = next;
                }
                MoveOutcome::Rejected => panic!("solver produced an illegal jump {jump}"),
            }
        }
        assert_eq!(board, solution.final_board);
        assert!(solver.stats().nodes_expanded > 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert_eq!(
            Solver::new(SolverConfig::default().with_target_pegs(0)).err(),
            Some(ConfigError::Validation("target_pegs must be at least 1".to_string()))
        );
        assert_eq!(
            Solver::new(SolverConfig::default().with_max_nodes(0)).err(),
            Some(ConfigError::Validation("max_nodes must be > 0".to_string()))
        );
    }

    #[test]
    fn test_budget_exhausted() {
        let board = build(5).unwrap().with_hole(Position(1)).unwrap();
        let mut solver = Solver::new(SolverConfig::default().with_max_nodes(3)).unwrap();

        assert!(solver.solve(&board).is_none());
        assert!(solver.stats().budget_exhausted);
        assert_eq!(solver.stats().nodes_expanded, 3);
    }
}
