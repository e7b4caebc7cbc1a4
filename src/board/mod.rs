//! Board data model and construction.
//!
//! - `Cell`: peg flag plus precomputed jump connections
//! - `Board`: immutable value mapping positions to cells
//! - `build`: constructs a fully pegged board and its connection graph

mod builder;
mod cell;
mod grid;

pub use builder::build;
pub use cell::Cell;
pub use grid::{Board, PegKey};

/// Largest row count `build` accepts.
///
/// 128 rows is 8256 cells. Every cell owns a connection map, so boards much
/// larger than this cost hundreds of megabytes before the first move.
pub const MAX_ROW_COUNT: u32 = 128;
