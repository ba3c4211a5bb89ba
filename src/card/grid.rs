//! The 5×5 bingo card.
//!
//! Column `c` (0-indexed) holds numbers from the inclusive range
//! `[c*15+1, c*15+15]`, so the classic layout is B:1-15, I:16-30,
//! N:31-45, G:46-60, O:61-75. Ranges never overlap, which makes every
//! number on a card globally unique. The center cell is the free space
//! and holds no number.
//!
//! A card is immutable once generated.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GRID_SIZE};

/// Numbers per column range (and count of columns × that = 75).
pub const COLUMN_SPAN: u8 = 15;

/// Highest drawable number.
pub const MAX_NUMBER: u8 = 75;

/// Column header letters, left to right.
pub const COLUMN_LETTERS: [char; 5] = ['B', 'I', 'N', 'G', 'O'];

/// Inclusive number range for a column.
#[must_use]
pub fn column_range(col: u8) -> std::ops::RangeInclusive<u8> {
    assert!(col < GRID_SIZE, "Column out of 5x5 grid");
    (col * COLUMN_SPAN + 1)..=((col + 1) * COLUMN_SPAN)
}

/// All 12 winnable lines: 5 rows, 5 columns, 2 main diagonals.
pub fn lines() -> impl Iterator<Item = [Cell; 5]> {
    let rows = (0..GRID_SIZE).map(|r| -> [Cell; 5] { std::array::from_fn(|c| Cell::new(c as u8, r)) });
    let cols = (0..GRID_SIZE).map(|c| -> [Cell; 5] { std::array::from_fn(|r| Cell::new(c, r as u8)) });
    let diagonals: [[Cell; 5]; 2] = [
        std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
        std::array::from_fn(|i| Cell::new(4 - i as u8, i as u8)),
    ];
    rows.chain(cols).chain(diagonals)
}

/// An immutable randomized bingo card.
///
/// Stored column-major: `numbers[col][row]`. The free space is `None`;
/// every other cell is `Some(number)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    numbers: [[Option<u8>; 5]; 5],
}

impl Card {
    /// Build a card from per-column numbers, row order preserved.
    ///
    /// The value supplied at the free space is discarded; the cell is
    /// reserved and holds no number.
    #[must_use]
    pub fn from_columns(columns: [[u8; 5]; 5]) -> Self {
        let mut numbers = [[None; 5]; 5];
        for cell in Cell::all() {
            if !cell.is_free() {
                numbers[cell.col as usize][cell.row as usize] =
                    Some(columns[cell.col as usize][cell.row as usize]);
            }
        }
        Self { numbers }
    }

    /// Number printed at a cell, or `None` for the free space.
    #[must_use]
    pub fn number_at(&self, cell: Cell) -> Option<u8> {
        self.numbers[cell.col as usize][cell.row as usize]
    }

    /// Locate a number on the card.
    #[must_use]
    pub fn cell_of(&self, number: u8) -> Option<Cell> {
        Cell::all().find(|&cell| self.number_at(cell) == Some(number))
    }

    /// Whether a number appears anywhere on the card.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.cell_of(number).is_some()
    }

    /// Column letter for a drawable number (B-7, N-42, ...).
    #[must_use]
    pub fn letter_for(number: u8) -> char {
        assert!(
            (1..=MAX_NUMBER).contains(&number),
            "Number outside 1..=75"
        );
        COLUMN_LETTERS[((number - 1) / COLUMN_SPAN) as usize]
    }
}
