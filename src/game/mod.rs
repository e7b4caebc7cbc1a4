//! Game state controller and session.
//!
//! - `controller`: stateless turn sequencing (`start`, `submit_move`)
//! - `session`: a `Game` value that tracks phase and history for a caller loop

pub mod controller;
pub mod session;

pub use controller::{remove_initial_peg, start, submit_move, MoveOutcome};
pub use session::{Game, GamePhase, SessionError};
