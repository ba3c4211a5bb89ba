//! Card cell coordinates.
//!
//! ## Cell
//!
//! Type-safe (column, row) coordinate on the 5×5 card. Both axes are
//! 0-indexed. The center cell `Cell::FREE` is the free space: it holds
//! no number and always counts as covered. Representing it as a single
//! reserved constant keeps generation, marking, and verification from
//! each re-deriving the special case.

use serde::{Deserialize, Serialize};

/// Number of columns (and rows) on a card.
pub const GRID_SIZE: u8 = 5;

/// Coordinate of a single card cell.
///
/// Columns are 0-indexed left to right (B through O), rows 0-indexed
/// top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    /// The fixed free space at the center of every card.
    pub const FREE: Cell = Cell::new(2, 2);

    /// Create a new cell coordinate.
    ///
    /// Panics if either axis is out of the 5×5 grid.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        assert!(col < GRID_SIZE && row < GRID_SIZE, "Cell out of 5x5 grid");
        Self { col, row }
    }

    /// Whether this cell is the free space.
    #[must_use]
    pub const fn is_free(self) -> bool {
        self.col == Self::FREE.col && self.row == Self::FREE.row
    }

    /// Iterate over all 25 cells in column-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|col| (0..GRID_SIZE).map(move |row| Cell::new(col, row)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
