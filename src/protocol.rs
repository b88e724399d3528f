#![cfg(feature = "std")]
//! Request/response messages for hosting a session behind a transport.

use crate::core::{GameSession, GameStatus, GuessError, SessionState, Shot, ShotError};

pub const PROTOCOL_VERSION: u32 = 1;

/// Result of a shot as seen by a client: declined shots are a normal answer.
pub type ShotResult = Result<Shot, ShotError>;

/// Result of a guess as seen by a client.
pub type GuessResult = Result<bool, GuessError>;

/// Messages exchanged between a session host and its client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Opening handshake, echoed by the host.
    Hello { version: u32 },
    /// Fire a ray from the given border cell.
    Shoot { row: i8, col: i8 },
    ShotResp(ShotResult),
    /// Guess that the given cell holds an atom.
    Guess { row: i8, col: i8 },
    GuessResp(GuessResult),
    /// Request the current game status.
    StatusReq,
    StatusResp(GameStatus),
    /// Request a full snapshot for rendering.
    SnapshotReq,
    SnapshotResp(SessionState),
    /// Request could not be served.
    Error(String),
}

/// Operations a client can perform on a session, local or remote.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn shoot(&mut self, row: i8, col: i8) -> anyhow::Result<ShotResult>;
    async fn guess(&mut self, row: i8, col: i8) -> anyhow::Result<GuessResult>;
    async fn status(&mut self) -> anyhow::Result<GameStatus>;
    async fn snapshot(&mut self) -> anyhow::Result<SessionState>;
}

#[async_trait::async_trait]
impl GameApi for GameSession {
    async fn shoot(&mut self, row: i8, col: i8) -> anyhow::Result<ShotResult> {
        Ok(GameSession::shoot(self, row, col))
    }

    async fn guess(&mut self, row: i8, col: i8) -> anyhow::Result<GuessResult> {
        Ok(GameSession::guess(self, row, col))
    }

    async fn status(&mut self) -> anyhow::Result<GameStatus> {
        Ok(GameSession::status(self))
    }

    async fn snapshot(&mut self) -> anyhow::Result<SessionState> {
        Ok(self.state())
    }
}

/// Encode a message into a single bincode frame.
pub fn encode_frame(msg: &Message) -> anyhow::Result<Vec<u8>> {
    bincode::serialize(msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))
}

/// Decode a bincode frame produced by [`encode_frame`].
pub fn decode_frame(frame: &[u8]) -> anyhow::Result<Message> {
    bincode::deserialize(frame).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
}
