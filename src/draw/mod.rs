//! Draw sequencing over the 1..=75 pool.

pub mod sequencer;

pub use sequencer::DrawSequencer;
