//! Move engine.
//!
//! Pure functions over `Board` values:
//! - What jumps are legal from a position
//! - Whether a requested jump is legal
//! - Applying a jump to produce a new board
//! - Whether any jump remains

pub mod moves;

pub use moves::{all_jumps, any_move_available, apply_move, check_move, legal_moves};
