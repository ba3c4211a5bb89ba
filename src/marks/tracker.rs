//! Which card cells the player has covered.
//!
//! The free space is pre-marked and can never be unmarked; every other
//! cell toggles. Toggling is its own inverse, so two presses of the same
//! cell restore the prior state.

use rustc_hash::FxHashSet;

use crate::core::Cell;

/// Set of covered cells, always containing the free space.
#[derive(Clone, Debug)]
pub struct MarkTracker {
    marked: FxHashSet<Cell>,
}

impl Default for MarkTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkTracker {
    /// Create a tracker with only the free space marked.
    #[must_use]
    pub fn new() -> Self {
        let mut marked = FxHashSet::default();
        marked.insert(Cell::FREE);
        Self { marked }
    }

    /// Flip a cell's membership. No-op on the free space.
    pub fn toggle(&mut self, cell: Cell) {
        if cell.is_free() {
            return;
        }
        if !self.marked.insert(cell) {
            self.marked.remove(&cell);
        }
    }

    /// Whether a cell is covered.
    #[must_use]
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.marked.contains(&cell)
    }

    /// Iterate over covered cells (order unspecified).
    pub fn marked(&self) -> impl Iterator<Item = Cell> + '_ {
        self.marked.iter().copied()
    }

    /// Number of covered cells, free space included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// True only before any player mark; the free space alone remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.len() == 1
    }

    /// Clear back to only the free space, for a new game.
    pub fn reset(&mut self) {
        self.marked.clear();
        self.marked.insert(Cell::FREE);
    }
}
