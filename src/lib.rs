//! lib2048: a 2048 game engine, an agent contract and an alpha-beta player
//!
//! This crate provides:
//! - A square `Board` of any side length with moves, spawns and win/loss detection (`engine`)
//! - A plain-data board form with JSON support (`serialization`)
//! - TOML engine settings (`config`)
//! - The `GameAgent` contract and a local `Game` implementing it (`agent`)
//! - Search helpers and an alpha-beta player (`ai`)
//!
//! Quick start:
//! ```
//! use lib2048::engine::{Board, Direction, GameState};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut b = Board::new_empty();
//! b.reset(&mut rng);
//! b.make_move(Direction::Left, true, &mut rng);
//! assert_eq!(b.game_state(), GameState::Ongoing);
//! ```
//!
//! Note: `make_move_thread`, `add_random_thread` and `reset_thread` use the
//! thread-local RNG. Prefer the generic methods when you need determinism.
//!
pub mod agent;
pub mod ai;
pub mod config;
pub mod engine;
pub mod serialization;
