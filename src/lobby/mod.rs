//! Lobby directory (external collaborator boundary).
//!
//! - `record`: wire-shaped game records and request bodies
//! - `directory`: the `LobbyDirectory` repository trait and in-memory impl
//! - `error`: 4xx-class boundary errors

pub mod directory;
pub mod error;
pub mod record;

pub use directory::{InMemoryLobby, LobbyDirectory};
pub use error::LobbyError;
pub use record::{CreateGameRequest, GameRecord, LobbyStatus};
