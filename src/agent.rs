//! The agent contract: what a player (human or AI) needs from a running game.
//!
//! `GameAgent` is engine-agnostic. [`Game`] implements it on top of this
//! crate's [`Board`]; an adapter driving some other 2048 implementation can
//! implement it as well, and every player in [`crate::ai`] works against
//! either.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{ConfigError, EngineConfig};
use crate::engine::{Board, Coordinate, Direction, GameState, Score};

/// A running game an agent can observe and drive.
pub trait GameAgent {
    /// Apply a move; a random tile appears if the board changed.
    fn make_move(&mut self, direction: Direction);
    fn game_state(&self) -> GameState;
    fn score(&self) -> Score;
    /// Exponent at `coord`, `None` if out of range.
    fn cell_at(&self, coord: Coordinate) -> Option<u32>;
    /// All exponents, `[y][x]`.
    fn cells(&self) -> Vec<Vec<u32>>;
    /// Start over with a freshly populated board.
    fn reset(&mut self);
}

/// A game backed by a local [`Board`] and its own RNG.
///
/// ```
/// use lib2048::agent::{Game, GameAgent};
/// use lib2048::config::EngineConfig;
/// use lib2048::engine::{Direction, GameState};
///
/// let mut game = Game::seeded(&EngineConfig::default(), 7).unwrap();
/// assert_eq!(game.board().empty_cells().len(), 14);
/// game.make_move(Direction::Up);
/// assert_eq!(game.game_state(), GameState::Ongoing);
/// ```
#[derive(Debug, Clone)]
pub struct Game<R: Rng = StdRng> {
    board: Board,
    rng: R,
}

impl Game<StdRng> {
    /// New game with a deterministic RNG.
    pub fn seeded(cfg: &EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Game::new(cfg, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// New game: an empty grid populated with `initial_populate_count` tiles.
    ///
    /// Fails if `cfg` does not pass [`EngineConfig::validate`].
    pub fn new(cfg: &EngineConfig, mut rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut board = Board::new_empty_with(cfg);
        board.reset(&mut rng);
        Ok(Game { board, rng })
    }

    /// Continue from an existing board (no tiles added).
    pub fn from_board(board: Board, rng: R) -> Self {
        Game { board, rng }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }
}

impl<R: Rng> GameAgent for Game<R> {
    fn make_move(&mut self, direction: Direction) {
        self.board.make_move(direction, true, &mut self.rng);
    }

    fn game_state(&self) -> GameState {
        self.board.game_state()
    }

    fn score(&self) -> Score {
        self.board.score()
    }

    fn cell_at(&self, coord: Coordinate) -> Option<u32> {
        self.board.cell_at(coord)
    }

    fn cells(&self) -> Vec<Vec<u32>> {
        self.board.cells()
    }

    fn reset(&mut self) {
        self.board.reset(&mut self.rng);
    }
}
