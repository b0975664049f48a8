use super::MAX_EXPONENT;

/// One board position, holding the log2 of its displayed tile value.
///
/// `0` is empty, `1` displays as 2, `11` displays as 2048. Cells are plain
/// values: copying one yields an independent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u32);

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell(0);

    /// Construct a cell from a raw exponent, clamped to [`MAX_EXPONENT`].
    #[inline]
    pub fn new(value: u32) -> Self {
        Cell(value.min(MAX_EXPONENT))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The stored exponent.
    #[inline]
    pub fn val(self) -> u32 {
        self.0
    }

    /// The displayed tile value (`2^val`), or 0 when empty.
    #[inline]
    pub fn display_value(self) -> u64 {
        if self.0 == 0 {
            0
        } else {
            1u64 << self.0
        }
    }

    /// Double the displayed value. Saturates at [`MAX_EXPONENT`].
    #[inline]
    pub fn increment(&mut self) {
        if self.0 < MAX_EXPONENT {
            self.0 += 1;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self {
        Cell::new(v)
    }
}

impl From<Cell> for u32 {
    fn from(c: Cell) -> Self {
        c.val()
    }
}
