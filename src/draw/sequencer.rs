//! The caller's draw sequence.
//!
//! The pool 1..=75 is partitioned at all times into `drawn` (insertion
//! order = draw order) and `remaining`. A drawn number never returns to
//! the pool; once 75 numbers are out, further draws yield `None` without
//! mutating anything.

use crate::card::MAX_NUMBER;
use crate::core::GameRng;

/// Draws numbers uniformly at random from the undrawn remainder.
#[derive(Clone, Debug)]
pub struct DrawSequencer {
    rng: GameRng,
    drawn: Vec<u8>,
    remaining: Vec<u8>,
}

impl DrawSequencer {
    /// Create a sequencer with a full pool.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            drawn: Vec::with_capacity(MAX_NUMBER as usize),
            remaining: (1..=MAX_NUMBER).collect(),
        }
    }

    /// Draw one number, or `None` when the pool is exhausted.
    ///
    /// Selection is uniform over `remaining` only, so a number can never
    /// be drawn twice.
    pub fn draw(&mut self) -> Option<u8> {
        if self.remaining.is_empty() {
            return None;
        }

        let index = self.rng.gen_range_usize(0..self.remaining.len());
        let number = self.remaining.swap_remove(index);
        self.drawn.push(number);
        Some(number)
    }

    /// Restore the full pool for a new game.
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.remaining = (1..=MAX_NUMBER).collect();
    }

    /// Numbers drawn so far, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[u8] {
        &self.drawn
    }

    /// The most recently drawn number.
    #[must_use]
    pub fn last_drawn(&self) -> Option<u8> {
        self.drawn.last().copied()
    }

    /// Whether a number has already been called.
    #[must_use]
    pub fn was_drawn(&self, number: u8) -> bool {
        self.drawn.contains(&number)
    }

    /// Count of undrawn numbers.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Whether all 75 numbers are out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
