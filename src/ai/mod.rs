//! AI players for 2048.
//!
//! [`common`] holds the pure building blocks (successor moves, spawn
//! outcomes, a static evaluation) and [`AlphaBeta`] searches over them.
//! Players read boards through [`crate::agent::GameAgent`] via
//! [`common::current_state`], so they drive a local [`crate::agent::Game`]
//! or any other implementation of the contract.
//!
//! Quick start
//! ```
//! use lib2048::agent::{Game, GameAgent};
//! use lib2048::ai::{common, AlphaBeta};
//! use lib2048::config::EngineConfig;
//! use lib2048::engine::Board;
//!
//! let mut game = Game::seeded(&EngineConfig::default(), 123).unwrap();
//! let mut ab = AlphaBeta::new();
//! let board = Board::deserialize(&common::current_state(&game)).unwrap();
//! let m = ab.best_move(&board).unwrap();
//! game.make_move(m);
//! ```

pub mod common;
mod alphabeta;

pub use alphabeta::{AlphaBeta, AlphaBetaConfig};

/// Basic search stats for a single decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub peak_nodes: u64,
    /// Memoized leaf evaluations held by the player.
    pub cache_entries: usize,
}
