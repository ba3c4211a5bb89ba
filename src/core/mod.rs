//! Core engine types: cell coordinates and deterministic RNG.
//!
//! These are the building blocks the rest of the engine is written
//! against. Nothing here knows about cards, draws, or sessions.

pub mod cell;
pub mod rng;

pub use cell::{Cell, GRID_SIZE};
pub use rng::GameRng;
