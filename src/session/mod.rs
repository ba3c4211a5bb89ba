//! Game session lifecycle.

pub mod machine;
pub mod timer;

pub use machine::{GameSession, SessionStatus};
pub use timer::{RevertTimer, INVALID_DISPLAY};
