//! The lobby directory: list, fetch, and create game records.
//!
//! The engine never depends on the lobby's storage mechanism; it talks
//! to the `LobbyDirectory` trait and reads back an id to key a session.
//! `InMemoryLobby` is the reference implementation.

use log::info;
use time::OffsetDateTime;

use super::error::LobbyError;
use super::record::{CreateGameRequest, GameRecord, LobbyStatus};

/// Repository of lobby game records.
pub trait LobbyDirectory {
    /// Snapshot of all records, in creation order.
    fn list_games(&self) -> Vec<GameRecord>;

    /// Fetch one record by id.
    fn get_game(&self, id: &str) -> Result<GameRecord, LobbyError>;

    /// Create a record, assigning the next id. The creator counts as
    /// the first player and the game starts in `waiting`.
    fn create_game(&mut self, request: CreateGameRequest) -> GameRecord;

    /// Create from a raw JSON body, as received off the wire.
    ///
    /// An unparsable body is a `MalformedRequest` (400-class); a parsed
    /// body creates normally (201-class).
    fn create_game_json(&mut self, body: &str) -> Result<GameRecord, LobbyError> {
        let request: CreateGameRequest = serde_json::from_str(body)?;
        Ok(self.create_game(request))
    }
}

/// Vec-backed lobby, suitable for a single-process deployment.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLobby {
    games: Vec<GameRecord>,
}

impl InMemoryLobby {
    /// Create an empty lobby.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: one past the highest numeric id present, starting at 1.
    fn next_id(&self) -> u64 {
        self.games
            .iter()
            .filter_map(|game| game.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl LobbyDirectory for InMemoryLobby {
    fn list_games(&self) -> Vec<GameRecord> {
        self.games.clone()
    }

    fn get_game(&self, id: &str) -> Result<GameRecord, LobbyError> {
        self.games
            .iter()
            .find(|game| game.id == id)
            .cloned()
            .ok_or_else(|| LobbyError::NotFound(id.to_string()))
    }

    fn create_game(&mut self, request: CreateGameRequest) -> GameRecord {
        let id = self.next_id().to_string();
        let name = request
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Bingo Game #{id}"));

        let record = GameRecord {
            id,
            name,
            players: 1,
            status: LobbyStatus::Waiting,
            created_at: OffsetDateTime::now_utc(),
        };

        info!("lobby created game {} ({})", record.id, record.name);
        self.games.push(record.clone());
        record
    }
}
