//! Core engine types: positions, triangular arithmetic, errors, configuration, RNG.
//!
//! These are the small building blocks shared by the board, the move
//! engine, and the search code.

pub mod triangular;
pub mod position;
pub mod error;
pub mod config;
pub mod rng;

pub use position::{Jump, MoveRecord, Position};
pub use error::{BoardError, ConfigError, MoveError};
pub use config::{GameConfig, SolverConfig};
pub use rng::GameRng;
