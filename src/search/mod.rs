//! Automated play: playout policies and a solver.
//!
//! - `MovePolicy`: how to pick a jump during a playout (first, random)
//! - `playout`: drive a board to its end with a policy
//! - `Solver`: depth-first search for a sequence down to a target peg count

pub mod policy;
pub mod solver;

pub use policy::{playout, FirstJump, MovePolicy, Playout, RandomJump};
pub use solver::{Solution, Solver, SolverStats};
