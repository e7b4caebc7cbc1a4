//! Playout policies.
//!
//! A `MovePolicy` picks one jump from the legal list; `playout` drives the
//! controller with it until the game ends or a turn cap is hit.

use tracing::debug;

use crate::board::Board;
use crate::core::{GameRng, Jump};
use crate::game::{submit_move, MoveOutcome};
use crate::rules::{all_jumps, any_move_available};

/// Policy for choosing the next jump during a playout.
pub trait MovePolicy {
    /// Choose one of `jumps` (all legal on `board`), or `None` to stop.
    fn choose(&mut self, board: &Board, jumps: &[Jump]) -> Option<Jump>;
}

/// Always takes the first legal jump (lowest origin, then lowest destination).
#[derive(Clone, Debug, Default)]
pub struct FirstJump;

impl MovePolicy for FirstJump {
    fn choose(&mut self, _board: &Board, jumps: &[Jump]) -> Option<Jump> {
        jumps.first().copied()
    }
}

/// Picks uniformly at random with a seeded, reproducible RNG.
#[derive(Clone, Debug)]
pub struct RandomJump {
    rng: GameRng,
}

impl RandomJump {
    /// Create a random policy from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random policy from an existing RNG (e.g. a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomJump {
    fn choose(&mut self, _board: &Board, jumps: &[Jump]) -> Option<Jump> {
        self.rng.choose(jumps).copied()
    }
}

/// Result of a playout.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Board after the last applied jump.
    pub final_board: Board,
    /// Jumps applied, in order.
    pub jumps: Vec<Jump>,
    /// True if the playout reached a terminal board.
    pub finished: bool,
}

impl Playout {
    /// Pegs left on the final board.
    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        self.final_board.peg_count()
    }
}

/// Play from `board` with `policy` for at most `max_turns` jumps.
///
/// Stops early on game over, when the policy declines, or when it picks an
/// illegal jump.
pub fn playout<P: MovePolicy + ?Sized>(board: &Board, policy: &mut P, max_turns: usize) -> Playout {
    let mut current = board.clone();
    let mut jumps = Vec::new();
    let mut finished = !any_move_available(&current);

    while !finished && jumps.len() < max_turns {
        let legal = all_jumps(&current);
        let Some(jump) = policy.choose(&current, &legal) else {
            break;
        };

        match submit_move(&current, jump.from, jump.to) {
            MoveOutcome::Applied(next) => current = next,
            MoveOutcome::GameOver(next, _) => {
                current = next;
                finished = true;
            }
            MoveOutcome::Rejected => {
                debug!(%jump, "policy chose an illegal jump");
                break;
            }
        }
        jumps.push(jump);
    }

    Playout {
        final_board: current,
        jumps,
        finished,
    }
}
