//! Player mark tracking.

pub mod tracker;

pub use tracker::MarkTracker;
