use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated score: the sum of displayed values of every merge result.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Right, Direction::Down];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "UP",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
        };
        f.write_str(s)
    }
}

/// Whether the game is in progress, won, or lost.
///
/// `Win` and `Loss` are terminal for gameplay, but a board in either state
/// still accepts moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    Win,
    #[default]
    Ongoing,
    Loss,
}

impl GameState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameState::Ongoing
    }
}

/// A board position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}
