use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};
use rand::Rng;

use super::cell::Cell;
use super::row::{Row, Traversal};
use super::types::{Coordinate, Direction, GameState, Score};
use crate::config::EngineConfig;

/// Square 2048 grid: rows indexed by `y`, cells within a row by `x`.
///
/// Moves are applied in place. Left/right moves run the row primitive
/// directly; up/down moves rotate the grid so the direction becomes
/// "right", run the primitive, then rotate back.
///
/// Equality and hashing consider cell contents and score only.
///
/// ```
/// use lib2048::engine::{Board, Direction, GameState};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut b = Board::new_empty();
/// b.reset(&mut rng);
/// assert_eq!(b.empty_cells().len(), 14);
/// b.make_move(Direction::Left, true, &mut rng);
/// assert_eq!(b.game_state(), GameState::Ongoing);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
    score: Score,
    state: GameState,
    win_value: u32,
    initial_populate_count: usize,
}

impl Board {
    /// An all-empty grid with the default configuration.
    pub fn new_empty() -> Self {
        Self::new_empty_with(&EngineConfig::default())
    }

    /// An all-empty `side_len x side_len` grid, score 0.
    pub fn new_empty_with(cfg: &EngineConfig) -> Self {
        let rows = (0..cfg.side_len).map(|_| Row::new_empty(cfg.side_len)).collect();
        Self::from_rows(rows, 0, cfg)
    }

    /// Assemble a board from already-validated rows and compute its state.
    pub(crate) fn from_rows(rows: Vec<Row>, score: Score, cfg: &EngineConfig) -> Self {
        let mut board = Board {
            rows,
            score,
            state: GameState::Ongoing,
            win_value: cfg.win_value,
            initial_populate_count: cfg.initial_populate_count,
        };
        board.state = board.compute_state();
        board
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows (the `y` extent).
    #[inline]
    pub fn y_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the `x` extent).
    #[inline]
    pub fn x_count(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    #[inline]
    pub fn side_len(&self) -> usize {
        self.y_count()
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    #[inline]
    pub fn initial_populate_count(&self) -> usize {
        self.initial_populate_count
    }

    /// Exponents as nested vectors, `[y][x]`.
    pub fn cells(&self) -> Vec<Vec<u32>> {
        self.rows.iter().map(Row::serialize).collect()
    }

    /// True when `coord` lies inside `[0, x_count) x [0, y_count)`.
    #[inline]
    pub fn is_coord_valid(&self, coord: Coordinate) -> bool {
        coord.y < self.y_count() && coord.x < self.x_count()
    }

    /// The exponent at `coord`, or `None` when the coordinate is out of range.
    pub fn cell_at(&self, coord: Coordinate) -> Option<u32> {
        self.rows.get(coord.y)?.get(coord.x).map(Cell::val)
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.rows.get_mut(coord.y)?.cells_mut().get_mut(coord.x)
    }

    /// True if no cell holds a tile.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flat_map(Row::cells).all(|c| c.is_empty())
    }

    /// True if every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flat_map(Row::cells).all(|c| !c.is_empty())
    }

    /// Highest displayed tile value on the board (0 for an empty board).
    pub fn highest_tile(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(Row::cells)
            .map(|c| c.display_value())
            .max()
            .unwrap_or(0)
    }

    /// Walk the grid from `start` one cell at a time toward `dir`.
    ///
    /// Yields `start` first; yields nothing if `start` is out of range.
    pub fn line(&self, start: Coordinate, dir: Direction) -> LineIter {
        LineIter {
            next: self.is_coord_valid(start).then_some(start),
            dir,
            x_count: self.x_count(),
            y_count: self.y_count(),
        }
    }

    /// Coordinates of empty cells, column by column (`x` outer, `y` inner).
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        let mut out = Vec::new();
        for x in 0..self.x_count() {
            for coord in self.line(Coordinate::new(x, 0), Direction::Down) {
                if self.cell_at(coord) == Some(0) {
                    out.push(coord);
                }
            }
        }
        out
    }

    /// Place a 2 (80%) or 4 (20%) in a uniformly chosen empty cell.
    ///
    /// Returns `false` and leaves the board untouched when it is full.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let coord = empty[rng.gen_range(0..empty.len())];
        let mut tile = Cell::new(1);
        if rng.gen_range(0..10) >= 8 {
            tile.increment();
        }
        match self.cell_mut(coord) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Fill the empty cell at `coord` with `exponent` and recompute the game
    /// state. The exponent is clamped to [`super::MAX_EXPONENT`].
    ///
    /// Returns `false` (board untouched) if `coord` is out of range or the
    /// cell already holds a tile.
    pub fn place_tile(&mut self, coord: Coordinate, exponent: u32) -> bool {
        match self.cell_mut(coord) {
            Some(cell) if cell.is_empty() => *cell = Cell::new(exponent),
            _ => return false,
        }
        self.refresh_state();
        true
    }

    /// Convenience: like `add_random` but uses thread-local RNG.
    pub fn add_random_thread(&mut self) -> bool {
        let mut rng = rand::thread_rng();
        self.add_random(&mut rng)
    }

    /// Rotate the grid 90 degrees clockwise.
    ///
    /// Row `y` of the result is column `y` of the original read bottom to top.
    /// On a non-square grid the `x`/`y` extents swap.
    pub fn rotate_clockwise(&mut self) {
        let (xs, ys) = (self.x_count(), self.y_count());
        let rows: Vec<Row> = (0..xs)
            .map(|ny| {
                Row::from_cells((0..ys).map(|nx| self.rows[ys - 1 - nx].cells()[ny]).collect())
            })
            .collect();
        self.rows = rows;
    }

    /// Rotate the grid 90 degrees counter-clockwise; inverse of [`Board::rotate_clockwise`].
    pub fn rotate_unclockwise(&mut self) {
        let (xs, ys) = (self.x_count(), self.y_count());
        let rows: Vec<Row> = (0..xs)
            .map(|ny| {
                Row::from_cells((0..ys).map(|nx| self.rows[nx].cells()[xs - 1 - ny]).collect())
            })
            .collect();
        self.rows = rows;
    }

    fn rotate_rows(&mut self, dir: Traversal) -> Score {
        self.rows
            .iter_mut()
            .fold(0, |acc: Score, row| acc.saturating_add(row.rotate(dir)))
    }

    /// Slide/merge tiles toward `dir` and add the merge score. No random tile,
    /// no game-state update.
    pub fn shift(&mut self, dir: Direction) -> Score {
        let gained = match dir {
            Direction::Up => {
                self.rotate_clockwise();
                let gained = self.rotate_rows(Traversal::Right);
                self.rotate_unclockwise();
                gained
            }
            Direction::Down => {
                self.rotate_unclockwise();
                let gained = self.rotate_rows(Traversal::Right);
                self.rotate_clockwise();
                gained
            }
            Direction::Right => self.rotate_rows(Traversal::Right),
            Direction::Left => self.rotate_rows(Traversal::Left),
        };
        self.score = self.score.saturating_add(gained);
        gained
    }

    /// Apply a move, then spawn a tile if the board changed and
    /// `add_random_tile` is set. The game state is recomputed either way.
    ///
    /// Returns whether the move changed the board.
    pub fn make_move<R: Rng + ?Sized>(
        &mut self,
        dir: Direction,
        add_random_tile: bool,
        rng: &mut R,
    ) -> bool {
        let (changed, gained) = self.shift_detect_change(dir);
        if changed && add_random_tile {
            self.add_random(rng);
        }
        self.refresh_state();
        trace!("move {dir}: changed={changed} gained={gained} score={}", self.score);
        changed
    }

    /// Apply a move without spawning a tile, then recompute the game state.
    ///
    /// This is the deterministic transition searched by AI players.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        let (changed, _) = self.shift_detect_change(dir);
        self.refresh_state();
        changed
    }

    fn shift_detect_change(&mut self, dir: Direction) -> (bool, Score) {
        let before = self.clone();
        let gained = self.shift(dir);
        (*self != before, gained)
    }

    /// Convenience: like `make_move` (with a random tile) but uses thread-local RNG.
    pub fn make_move_thread(&mut self, dir: Direction) -> bool {
        let mut rng = rand::thread_rng();
        self.make_move(dir, true, &mut rng)
    }

    /// Clear the grid, zero the score and place `initial_populate_count` tiles.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.rows.iter_mut().flat_map(|r| r.cells_mut().iter_mut()) {
            cell.clear();
        }
        self.score = 0;
        self.state = GameState::Ongoing;
        for _ in 0..self.initial_populate_count {
            self.add_random(rng);
        }
        self.refresh_state();
    }

    /// Convenience: like `reset` but uses thread-local RNG.
    pub fn reset_thread(&mut self) {
        let mut rng = rand::thread_rng();
        self.reset(&mut rng)
    }

    fn refresh_state(&mut self) {
        let next = self.compute_state();
        if next != self.state {
            debug!("game state {:?} -> {:?} at score {}", self.state, next, self.score);
        }
        self.state = next;
    }

    /// Win if any tile reaches `win_value`; loss if the grid is full and
    /// neither a right nor an up move changes it.
    fn compute_state(&self) -> GameState {
        let cells = || self.rows.iter().flat_map(Row::cells);
        if cells().any(|c| c.val() >= self.win_value) {
            return GameState::Win;
        }
        if !self.is_full() {
            return GameState::Ongoing;
        }
        for dir in [Direction::Right, Direction::Up] {
            let mut trial = self.clone();
            trial.shift(dir);
            if trial != *self {
                return GameState::Ongoing;
            }
        }
        GameState::Loss
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.rows == other.rows
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.score.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.x_count() * 8);
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f, "{rule}")?;
            }
            let line: Vec<String> = row.cells().iter().map(|c| format_val(*c)).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// Center a tile's displayed value in a 7-character slot.
fn format_val(cell: Cell) -> String {
    if cell.is_empty() {
        return " ".repeat(7);
    }
    format!("{:^7}", cell.display_value())
}

/// Iterator over the coordinates of one line of the grid, from a start cell
/// toward a direction until the edge.
#[derive(Debug, Clone)]
pub struct LineIter {
    next: Option<Coordinate>,
    dir: Direction,
    x_count: usize,
    y_count: usize,
}

impl Iterator for LineIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next?;
        let Coordinate { x, y } = cur;
        self.next = match self.dir {
            Direction::Up if y > 0 => Some(Coordinate::new(x, y - 1)),
            Direction::Down if y + 1 < self.y_count => Some(Coordinate::new(x, y + 1)),
            Direction::Left if x > 0 => Some(Coordinate::new(x - 1, y)),
            Direction::Right if x + 1 < self.x_count => Some(Coordinate::new(x + 1, y)),
            _ => None,
        };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::SerializedBoard;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(rows: &[[u32; 4]; 4], score: Score) -> Board {
        let ser = SerializedBoard { rows: rows.iter().map(|r| r.to_vec()).collect(), score };
        Board::deserialize(&ser).unwrap()
    }

    const CHECKER: [[u32; 4]; 4] = [[2, 3, 2, 3], [3, 2, 3, 2], [2, 3, 2, 3], [3, 2, 3, 2]];

    #[test]
    fn test_new_empty() {
        let b = Board::new_empty();
        assert!(b.is_empty());
        assert_eq!(b.side_len(), 4);
        assert_eq!(b.score(), 0);
        assert_eq!(b.game_state(), GameState::Ongoing);
        assert_eq!(b.empty_cells().len(), 16);
    }

    #[test]
    fn test_move_left() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(&[[1, 2, 3, 4], [1, 3, 3, 2], [2, 0, 0, 2], [1, 0, 0, 2]], 0);
        assert!(b.make_move(Direction::Left, false, &mut rng));
        assert_eq!(
            b.cells(),
            vec![
                vec![1, 2, 3, 4],
                vec![1, 4, 2, 0],
                vec![3, 0, 0, 0],
                vec![1, 2, 0, 0],
            ]
        );
        assert_eq!(b.score(), 24);
    }

    #[test]
    fn test_move_right() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(&[[1, 2, 3, 4], [1, 3, 3, 2], [2, 0, 0, 2], [1, 0, 0, 2]], 0);
        assert!(b.make_move(Direction::Right, false, &mut rng));
        assert_eq!(
            b.cells(),
            vec![
                vec![1, 2, 3, 4],
                vec![0, 1, 4, 2],
                vec![0, 0, 0, 3],
                vec![0, 0, 1, 2],
            ]
        );
    }

    #[test]
    fn test_move_up() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(&[[1, 1, 2, 1], [2, 3, 0, 0], [3, 3, 0, 0], [4, 2, 2, 2]], 0);
        assert!(b.make_move(Direction::Up, false, &mut rng));
        assert_eq!(
            b.cells(),
            vec![
                vec![1, 1, 3, 1],
                vec![2, 4, 0, 2],
                vec![3, 2, 0, 0],
                vec![4, 0, 0, 0],
            ]
        );
        assert_eq!(b.score(), 16 + 8);
    }

    #[test]
    fn test_move_down() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(&[[1, 1, 2, 1], [2, 3, 0, 0], [3, 3, 0, 0], [4, 2, 2, 2]], 0);
        assert!(b.make_move(Direction::Down, false, &mut rng));
        assert_eq!(
            b.cells(),
            vec![
                vec![1, 0, 0, 0],
                vec![2, 1, 0, 0],
                vec![3, 4, 0, 1],
                vec![4, 2, 3, 2],
            ]
        );
    }

    #[test]
    fn test_score_accumulates_across_rows() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(&[[0, 0, 2, 2], [0, 4, 4, 2], [0, 0, 0, 0], [0, 0, 0, 0]], 10);
        b.make_move(Direction::Left, false, &mut rng);
        assert_eq!(b.cells()[0], vec![3, 0, 0, 0]);
        assert_eq!(b.cells()[1], vec![5, 2, 0, 0]);
        assert_eq!(b.score(), 10 + 8 + 32);
    }

    #[test]
    fn test_move_spawns_only_on_change() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut b = board(&CHECKER, 0);
        let before = b.clone();
        let state = b.game_state();
        assert!(!b.make_move(Direction::Right, true, &mut rng));
        assert_eq!(b, before);
        assert_eq!(b.game_state(), state);

        let mut b = board(&[[0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 0);
        assert!(!b.make_move(Direction::Right, true, &mut rng));
        assert_eq!(b.empty_cells().len(), 15);
        assert!(b.make_move(Direction::Left, true, &mut rng));
        assert_eq!(b.empty_cells().len(), 14);
    }

    #[test]
    fn test_slide_without_merge_counts_as_change() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut b = board(&[[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 0);
        assert!(b.make_move(Direction::Right, false, &mut rng));
        assert_eq!(b.cell_at(Coordinate::new(3, 0)), Some(1));
        assert_eq!(b.score(), 0);
        assert_eq!(b.empty_cells().len(), 15);
    }

    #[test]
    fn test_win_detection() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut b = board(&[[10, 10, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 0);
        assert_eq!(b.game_state(), GameState::Ongoing);
        b.make_move(Direction::Left, true, &mut rng);
        assert_eq!(b.cell_at(Coordinate::new(0, 0)), Some(11));
        assert_eq!(b.game_state(), GameState::Win);
        assert_eq!(b.highest_tile(), 2048);
    }

    #[test]
    fn test_win_value_is_configurable() {
        let cfg = EngineConfig { win_value: 3, ..EngineConfig::default() };
        let ser = SerializedBoard {
            rows: vec![vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            score: 0,
        };
        let mut b = Board::deserialize_with(&ser, &cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        b.make_move(Direction::Left, false, &mut rng);
        assert_eq!(b.game_state(), GameState::Win);
    }

    #[test]
    fn test_loss_detection() {
        let b = board(&CHECKER, 0);
        assert_eq!(b.game_state(), GameState::Loss);

        // a vertical merge is still available
        let b = board(&[[1, 2, 1, 2], [1, 3, 4, 3], [2, 1, 2, 1], [1, 2, 1, 2]], 0);
        assert_eq!(b.game_state(), GameState::Ongoing);

        // full but a horizontal merge is available
        let b = board(&[[1, 1, 2, 3], [2, 3, 4, 5], [3, 4, 5, 6], [4, 5, 6, 7]], 0);
        assert_eq!(b.game_state(), GameState::Ongoing);
    }

    #[test]
    fn test_loss_after_move() {
        let mut rng = StdRng::seed_from_u64(4);
        // Left merges 1+1, the spawned tile lands in the single hole.
        let mut b = board(&[[1, 1, 4, 5], [4, 5, 6, 7], [5, 6, 7, 8], [6, 7, 8, 9]], 0);
        assert!(b.make_move(Direction::Left, true, &mut rng));
        assert!(b.is_full());
        let top = b.cells()[0].clone();
        assert_eq!(&top[..3], &[2, 4, 5]);
        assert_eq!(b.game_state(), GameState::Loss);
    }

    #[test]
    fn test_empty_cells_order() {
        let b = board(&[[2, 3, 1, 0], [1, 3, 2, 4], [0, 2, 1, 3], [0, 1, 1, 0]], 0);
        assert_eq!(
            b.empty_cells(),
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(0, 3),
                Coordinate::new(3, 0),
                Coordinate::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_add_random_until_full() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut b = Board::new_empty();
        for _ in 0..16 {
            assert!(b.add_random(&mut rng));
        }
        assert!(b.is_full());
        assert!(b.cells().iter().flatten().all(|&v| v == 1 || v == 2));
        let before = b.clone();
        assert!(!b.add_random(&mut rng));
        assert_eq!(b, before);
    }

    #[test]
    fn test_add_random_split() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut fours = 0;
        for _ in 0..2000 {
            let mut b = Board::new_empty();
            b.add_random(&mut rng);
            if b.highest_tile() == 4 {
                fours += 1;
            }
        }
        // 20% expected
        assert!((300..500).contains(&fours), "fours = {fours}");
    }

    #[test]
    fn test_reset() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = board(&CHECKER, 500);
        b.reset(&mut rng);
        assert_eq!(b.score(), 0);
        assert_eq!(b.empty_cells().len(), 14);
        assert_eq!(b.game_state(), GameState::Ongoing);
    }

    #[test]
    fn test_rotation_inverse() {
        let original = board(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 0, 1], [2, 0, 3, 0]], 99);
        let mut b = original.clone();
        b.rotate_clockwise();
        assert_ne!(b, original);
        assert_eq!(b.cells()[0], vec![2, 9, 5, 1]);
        b.rotate_unclockwise();
        assert_eq!(b, original);

        b.rotate_unclockwise();
        assert_eq!(b.cells()[0], vec![4, 8, 1, 0]);
        b.rotate_clockwise();
        assert_eq!(b, original);

        for _ in 0..4 {
            b.rotate_clockwise();
        }
        assert_eq!(b, original);
    }

    #[test]
    fn test_rotation_swaps_extents() {
        let cfg = EngineConfig::default();
        let rows = vec![Row::from_values(&[1, 2, 3]), Row::from_values(&[4, 5, 6])];
        let mut b = Board::from_rows(rows, 0, &cfg);
        b.rotate_clockwise();
        assert_eq!((b.x_count(), b.y_count()), (2, 3));
        assert_eq!(b.cells(), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
        b.rotate_unclockwise();
        assert_eq!(b.cells(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_clone_independence() {
        let mut rng = StdRng::seed_from_u64(8);
        let b = board(&[[1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 0]], 4);
        let mut c = b.clone();
        assert_eq!(b, c);
        c.make_move(Direction::Left, true, &mut rng);
        assert_ne!(b, c);
        assert_eq!(b.cells()[0], vec![1, 1, 0, 0]);
        assert_eq!(b.score(), 4);
    }

    #[test]
    fn test_equality_includes_score() {
        let a = board(&CHECKER, 0);
        let b = board(&CHECKER, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_coordinates() {
        let b = board(&[[2, 3, 1, 0], [1, 3, 2, 4], [0, 2, 1, 3], [0, 1, 1, 0]], 0);
        assert!(b.is_coord_valid(Coordinate::new(3, 3)));
        assert!(!b.is_coord_valid(Coordinate::new(4, 0)));
        assert!(!b.is_coord_valid(Coordinate::new(0, 4)));
        assert_eq!(b.cell_at(Coordinate::new(1, 0)), Some(3));
        assert_eq!(b.cell_at(Coordinate::new(3, 1)), Some(4));
        assert_eq!(b.cell_at(Coordinate::new(9, 9)), None);
    }

    #[test]
    fn test_apply_move_never_spawns() {
        let mut b = board(&[[0, 0, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 0);
        assert!(b.apply_move(Direction::Left));
        assert_eq!(b.cells()[0], vec![2, 0, 0, 0]);
        assert_eq!(b.empty_cells().len(), 15);
        assert!(!b.apply_move(Direction::Left));
    }

    #[test]
    fn test_place_tile() {
        let mut b = Board::new_empty();
        assert!(b.place_tile(Coordinate::new(2, 1), 11));
        assert_eq!(b.cell_at(Coordinate::new(2, 1)), Some(11));
        assert_eq!(b.game_state(), GameState::Win);
        assert!(!b.place_tile(Coordinate::new(4, 1), 1));

        let before = b.clone();
        assert!(!b.place_tile(Coordinate::new(2, 1), 1));
        assert_eq!(b, before);
        assert_eq!(b.cell_at(Coordinate::new(2, 1)), Some(11));
    }

    #[test]
    fn test_line_iter() {
        let b = Board::new_empty();
        let down: Vec<_> = b.line(Coordinate::new(2, 1), Direction::Down).collect();
        assert_eq!(down, vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]);
        let left: Vec<_> = b.line(Coordinate::new(1, 0), Direction::Left).collect();
        assert_eq!(left, vec![Coordinate::new(1, 0), Coordinate::new(0, 0)]);
        assert_eq!(b.line(Coordinate::new(0, 3), Direction::Up).count(), 4);
        assert_eq!(b.line(Coordinate::new(3, 3), Direction::Right).count(), 1);
        assert_eq!(b.line(Coordinate::new(4, 0), Direction::Right).count(), 0);
    }

    #[test]
    fn test_display() {
        let b = board(&[[11, 0, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 17]], 0);
        let s = b.to_string();
        assert!(s.contains("2048"));
        assert!(s.contains("131072"));
        assert_eq!(s.lines().count(), 7);
    }
}
