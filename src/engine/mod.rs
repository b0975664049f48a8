//! Engine module: cell, row and board types for a square 2048 grid.
//!
//! - `Cell` holds one log2-encoded tile (0 = empty).
//! - `Row` implements the single slide/merge primitive.
//! - `Board` composes rows into a grid and reduces all four directions to
//!   the row primitive by rotating the whole grid.

mod board;
mod cell;
mod row;
mod types;

pub use board::{Board, LineIter};
pub use cell::Cell;
pub use row::{Row, Traversal};
pub use types::{Coordinate, Direction, GameState, Score};

/// Largest exponent a cell may hold. `2^63` still fits a `u64` score.
pub const MAX_EXPONENT: u32 = 63;

/// Default exponent that wins the game (2^11 = 2048).
pub const DEFAULT_WIN_VALUE: u32 = 11;

/// Default number of tiles placed by `Board::reset`.
pub const DEFAULT_INITIAL_POPULATE_COUNT: usize = 2;

/// Default side length of the grid.
pub const DEFAULT_SIDE_LEN: usize = 4;
