//! # bingo-engine
//!
//! A turn-based bingo engine: randomized 5×5 cards, a 1..=75 draw pool,
//! mark tracking, and verifiable win claims, coordinated by a per-player
//! session state machine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic by seed**: Card generation and draw sequencing run
//!    on injected seeded RNG streams, so any game is reproducible.
//!
//! 2. **The free space is a property, not a special case**: `Cell::FREE`
//!    is reserved on every card, pre-marked, and never unmarked, so
//!    generation, marking, and verification can't diverge on it.
//!
//! 3. **Verification is a policy**: the self-reporting "declare bingo"
//!    rule and the mark-and-prove rule live behind one `ClaimPolicy`
//!    trait; sessions pick one without duplicating card or draw logic.
//!
//! 4. **Errors are values**: an exhausted pool is `None`, a bad claim is
//!    a transient `Invalid` status, a bad lobby request is a 4xx-class
//!    `LobbyError`. Nothing in the core is fatal.
//!
//! ## Modules
//!
//! - `core`: cell coordinates, deterministic RNG
//! - `card`: the immutable card, column ranges, line geometry, generation
//! - `draw`: the caller's draw sequence over the 1..=75 pool
//! - `marks`: player mark tracking with the fixed free space
//! - `verify`: line completeness and the two claim policies
//! - `session`: the `Idle → Active → {Won | Invalid}` state machine
//! - `lobby`: the external game-listing directory behind a repository trait
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Instant;
//! use bingo_engine::{GameSession, SessionStatus, Verdict};
//!
//! let mut session = GameSession::new(42);
//! session.start();
//!
//! let number = session.draw().expect("fresh pool");
//! if let Some(cell) = session.card().unwrap().cell_of(number) {
//!     session.toggle(cell);
//! }
//!
//! // One mark is no line; the claim is rejected, not fatal.
//! assert_eq!(session.claim(Instant::now()), Some(Verdict::Rejected));
//! assert_eq!(session.status(), SessionStatus::Invalid);
//! ```

pub mod card;
pub mod core;
pub mod draw;
pub mod lobby;
pub mod marks;
pub mod session;
pub mod verify;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, GRID_SIZE};

pub use crate::card::{
    column_range, lines, Card, CardGenerator, COLUMN_LETTERS, COLUMN_SPAN, MAX_NUMBER,
};

pub use crate::draw::DrawSequencer;

pub use crate::marks::MarkTracker;

pub use crate::verify::{has_complete_line, ClaimPolicy, LineOnly, MarkAndProve, Verdict};

pub use crate::session::{GameSession, SessionStatus, INVALID_DISPLAY};

pub use crate::lobby::{
    CreateGameRequest, GameRecord, InMemoryLobby, LobbyDirectory, LobbyError, LobbyStatus,
};
