//! One-dimensional slide-and-merge.
//!
//! Every board move reduces to [`Row::rotate`]: compact the row toward one
//! end, merging pairs of equal tiles that meet after compaction. A cell that
//! received a merge is frozen for the rest of the operation, so `[2, 2, 2, 2]`
//! becomes `[0, 0, 3, 3]` and never `[0, 0, 0, 4]`.

use super::cell::Cell;
use super::types::Score;

/// Traversal direction for the row primitive: toward the high index (`Right`)
/// or toward index 0 (`Left`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Right,
    Left,
}

impl Traversal {
    /// Step from `index` one cell in this direction, if it stays inside `len`.
    #[inline]
    fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Traversal::Right if index + 1 < len => Some(index + 1),
            Traversal::Left if index > 0 => Some(index - 1),
            _ => None,
        }
    }
}

/// A fixed-length line of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// A row of `len` empty cells.
    pub fn new_empty(len: usize) -> Self {
        Row { cells: vec![Cell::EMPTY; len] }
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Build a row from raw exponents. Values above [`super::MAX_EXPONENT`]
    /// are clamped to it; use `Board::deserialize` to reject them instead.
    pub fn from_values(values: &[u32]) -> Self {
        Row { cells: values.iter().copied().map(Cell::new).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the row has no cells at all (not: all cells empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn is_index_in_range(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Raw exponents, in index order.
    pub fn serialize(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.val()).collect()
    }

    /// Indexes visited by [`Row::rotate`].
    ///
    /// `Right`: `len-2` down to `0`. `Left`: `1` up to `len-1`. The cell
    /// against the target wall is never visited since it cannot move.
    pub fn traversal(&self, dir: Traversal) -> Vec<usize> {
        let len = self.cells.len();
        match dir {
            Traversal::Right => (0..len.saturating_sub(1)).rev().collect(),
            Traversal::Left => (1..len).collect(),
        }
    }

    /// The last index reachable from `index` by stepping in `dir` through
    /// empty cells. Returns `index` if the next cell is occupied or a wall.
    ///
    /// In `[3, 0, 0, 4]`, starting at 1 toward `Right` gives 2.
    pub fn find_farthest_index(&self, index: usize, dir: Traversal) -> usize {
        let mut farthest = index;
        while let Some(next) = dir.step(farthest, self.cells.len()) {
            if !self.cells[next].is_empty() {
                break;
            }
            farthest = next;
        }
        farthest
    }

    /// Slide and merge toward `dir`, returning the score gained by merges.
    pub fn rotate(&mut self, dir: Traversal) -> Score {
        let len = self.cells.len();
        let mut merged = vec![false; len];
        let mut gained: Score = 0;

        for i in self.traversal(dir) {
            let current = self.cells[i];
            if current.is_empty() {
                continue;
            }
            let far = self.find_farthest_index(i, dir);
            match dir.step(far, len) {
                Some(next) if !merged[next] && self.cells[next] == current => {
                    self.cells[next].increment();
                    self.cells[i].clear();
                    merged[next] = true;
                    gained = gained.saturating_add(self.cells[next].display_value());
                }
                _ if far != i => {
                    self.cells[far] = current;
                    self.cells[i].clear();
                }
                _ => {}
            }
        }
        gained
    }

    #[inline]
    pub fn rotate_right(&mut self) -> Score {
        self.rotate(Traversal::Right)
    }

    #[inline]
    pub fn rotate_left(&mut self) -> Score {
        self.rotate(Traversal::Left)
    }
}

impl From<Vec<u32>> for Row {
    fn from(values: Vec<u32>) -> Self {
        Row::from_values(&values)
    }
}
