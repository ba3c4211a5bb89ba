//! Randomized card generation.

use crate::core::{Cell, GameRng, GRID_SIZE};

use super::grid::{column_range, Card};

/// Generates randomized cards from an injected RNG.
///
/// Each column rejection-samples its 15-number range until it holds 5
/// distinct values; row assignment is generation order. The range always
/// has three times the values needed, so termination is guaranteed.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: GameRng,
}

impl CardGenerator {
    /// Create a generator over the given random source.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Produce a fresh card.
    pub fn generate(&mut self) -> Card {
        let mut columns = [[0u8; 5]; 5];

        for col in 0..GRID_SIZE {
            let range = column_range(col);
            let mut held = 0;

            while held < GRID_SIZE as usize {
                let candidate = self.rng.gen_range_u8(range.clone());
                if !columns[col as usize][..held].contains(&candidate) {
                    columns[col as usize][held] = candidate;
                    held += 1;
                }
            }
        }

        Card::from_columns(columns)
    }
}
