//! Property tests for card generation and draw sequencing invariants.

use proptest::prelude::*;

use bingo_engine::{column_range, Card, CardGenerator, Cell, DrawSequencer, GameRng};

fn generate(seed: u64) -> Card {
    CardGenerator::new(GameRng::new(seed)).generate()
}

proptest! {
    /// Every generated card keeps each column's numbers distinct and
    /// inside that column's 15-number range, with the free space empty.
    #[test]
    fn card_columns_valid(seed in any::<u64>()) {
        let card = generate(seed);

        prop_assert_eq!(card.number_at(Cell::FREE), None);

        for col in 0..5u8 {
            let range = column_range(col);
            let mut numbers: Vec<u8> = (0..5u8)
                .filter_map(|row| card.number_at(Cell::new(col, row)))
                .collect();

            for &n in &numbers {
                prop_assert!(range.contains(&n));
            }

            let before = numbers.len();
            numbers.sort_unstable();
            numbers.dedup();
            prop_assert_eq!(numbers.len(), before);
        }
    }

    /// Card numbers are globally distinct because column ranges never
    /// overlap.
    #[test]
    fn card_numbers_globally_distinct(seed in any::<u64>()) {
        let card = generate(seed);

        let mut numbers: Vec<u8> = Cell::all()
            .filter_map(|cell| card.number_at(cell))
            .collect();
        prop_assert_eq!(numbers.len(), 24);

        numbers.sort_unstable();
        numbers.dedup();
        prop_assert_eq!(numbers.len(), 24);
    }

    /// A full draw sequence emits each of 1..=75 exactly once, and the
    /// drawn/remaining partition always sums to 75.
    #[test]
    fn draw_sequence_is_a_permutation(seed in any::<u64>()) {
        let mut seq = DrawSequencer::new(GameRng::new(seed));
        let mut seen = [false; 76];

        for step in 1..=75usize {
            let n = seq.draw().expect("pool not exhausted");
            prop_assert!((1..=75).contains(&n));
            prop_assert!(!seen[n as usize]);
            seen[n as usize] = true;
            prop_assert_eq!(seq.drawn().len(), step);
            prop_assert_eq!(seq.drawn().len() + seq.remaining_count(), 75);
        }

        prop_assert!(seq.is_exhausted());
        prop_assert_eq!(seq.draw(), None);
    }

    /// Toggling any non-free cell twice restores the prior mark state.
    #[test]
    fn toggle_twice_is_identity(col in 0u8..5, row in 0u8..5) {
        use bingo_engine::MarkTracker;

        let cell = Cell::new(col, row);
        let mut marks = MarkTracker::new();
        let before: Vec<bool> = Cell::all().map(|c| marks.is_marked(c)).collect();

        marks.toggle(cell);
        marks.toggle(cell);

        let after: Vec<bool> = Cell::all().map(|c| marks.is_marked(c)).collect();
        prop_assert_eq!(before, after);
    }
}
