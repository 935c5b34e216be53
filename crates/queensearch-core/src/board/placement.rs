//! A single queen placement.

use std::fmt;

/// A queen at `(row, column)` on an N×N board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

impl Placement {
    /// Creates a placement at the given row and column.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Index of the rising diagonal (`row + column`).
    #[inline]
    pub const fn rising_diagonal(&self) -> usize {
        self.row + self.column
    }

    /// Index of the falling diagonal (`row - column`, signed).
    #[inline]
    pub fn falling_diagonal(&self) -> isize {
        self.row as isize - self.column as isize
    }

    /// Returns true if the two queens attack each other.
    ///
    /// Queens attack along a shared row, column, rising diagonal or
    /// falling diagonal.
    #[inline]
    pub fn attacks(&self, other: &Placement) -> bool {
        self.row == other.row
            || self.column == other.column
            || self.rising_diagonal() == other.rising_diagonal()
            || self.falling_diagonal() == other.falling_diagonal()
    }
}

impl From<(usize, usize)> for Placement {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}
