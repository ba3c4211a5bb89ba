//! Lobby game records and request bodies.
//!
//! Wire shapes match the lobby's JSON contract: camelCase fields,
//! lowercase status values, RFC 3339 creation timestamps.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Lifecycle of a lobby entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LobbyStatus {
    Waiting,
    Active,
    Finished,
}

/// One game listing.
///
/// Opaque to the engine beyond supplying an id to key a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Stringified numeric id, monotonically increasing from "1".
    pub id: String,
    pub name: String,
    pub players: u32,
    pub status: LobbyStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of a game-creation request. Name is optional; the lobby
/// substitutes a templated label when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub name: Option<String>,
}

impl CreateGameRequest {
    /// Request a game with an explicit name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_record_wire_shape() {
        let record = GameRecord {
            id: "1".to_string(),
            name: "Fun Bingo Night".to_string(),
            players: 3,
            status: LobbyStatus::Waiting,
            created_at: datetime!(2025-03-01 12:00:00 UTC),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\":\"2025-03-01T12:00:00Z\""));
        assert!(json.contains("\"status\":\"waiting\""));

        let back: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_create_request_accepts_empty_body() {
        let request: CreateGameRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, None);

        let request: CreateGameRequest =
            serde_json::from_str(r#"{"name":"Championship Round"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Championship Round"));
    }
}
