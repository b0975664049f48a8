//! Pure helpers shared by AI players: transitions, successors and a static
//! evaluation. None of these mutate their input.

use crate::agent::GameAgent;
use crate::engine::{Board, Direction, GameState};
use crate::serialization::SerializedBoard;

/// Order in which player moves are tried.
pub const ACTION_ORDER: [Direction; 4] =
    [Direction::Down, Direction::Left, Direction::Right, Direction::Up];

const EMPTY_CELL_WEIGHT: f64 = 6.0;
const GAME_STATE_WEIGHT: f64 = 1.0;
const LOW_VALUE_WEIGHT: f64 = -4.0;
const TERMINAL_MAGNITUDE: f64 = 1e5;

/// Read any agent (local engine or site adapter) into the transport form.
pub fn current_state<A: GameAgent + ?Sized>(agent: &A) -> SerializedBoard {
    SerializedBoard { rows: agent.cells(), score: agent.score() }
}

/// The board after `dir`, without a random tile.
pub fn next_state(board: &Board, dir: Direction) -> Board {
    let mut next = board.clone();
    next.apply_move(dir);
    next
}

/// Moves that change the grid, in [`ACTION_ORDER`].
pub fn next_actions(board: &Board) -> Vec<Direction> {
    ACTION_ORDER
        .into_iter()
        .filter(|&dir| next_state(board, dir).rows() != board.rows())
        .collect()
}

/// Every board the random spawn can produce: each empty cell holding a 2,
/// then each empty cell holding a 4.
pub fn random_additions(board: &Board) -> Vec<Board> {
    let empty = board.empty_cells();
    let mut out = Vec::with_capacity(empty.len() * 2);
    for exponent in [1, 2] {
        for &coord in &empty {
            let mut child = board.clone();
            child.place_tile(coord, exponent);
            out.push(child);
        }
    }
    out
}

#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.game_state().is_terminal()
}

/// Weighted sum of: empty cells, game outcome, and tiles below 8.
pub fn evaluate_state(board: &Board) -> f64 {
    let cells = board.cells();
    let values = cells.iter().flatten();
    let empty = values.clone().filter(|&&v| v == 0).count() as f64;
    let low = values.filter(|&&v| v != 0 && v < 3).count() as f64;
    let outcome = match board.game_state() {
        GameState::Loss => -TERMINAL_MAGNITUDE,
        GameState::Ongoing => 0.0,
        GameState::Win => TERMINAL_MAGNITUDE,
    };
    EMPTY_CELL_WEIGHT * empty + GAME_STATE_WEIGHT * outcome + LOW_VALUE_WEIGHT * low
}
