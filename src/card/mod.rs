//! Card structure and generation.
//!
//! - `grid`: the immutable 5×5 `Card`, column ranges, line geometry
//! - `generator`: randomized `CardGenerator`

pub mod generator;
pub mod grid;

pub use generator::CardGenerator;
pub use grid::{column_range, lines, Card, COLUMN_LETTERS, COLUMN_SPAN, MAX_NUMBER};
