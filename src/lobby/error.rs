//! Lobby boundary errors.
//!
//! These never touch an in-progress game session; they map straight to
//! 4xx-class responses at the transport.

use thiserror::Error;

/// Errors a lobby request can produce.
#[derive(Debug, Error)]
pub enum LobbyError {
    /// Request body did not parse.
    #[error("malformed lobby request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// No record under the requested id.
    #[error("no game with id {0}")]
    NotFound(String),
}

impl LobbyError {
    /// HTTP-style status code for the transport layer.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            LobbyError::MalformedRequest(_) => 400,
            LobbyError::NotFound(_) => 404,
        }
    }
}
