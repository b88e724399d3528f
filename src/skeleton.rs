#![cfg(feature = "std")]

use log::{debug, warn};

use crate::{protocol::GameApi, protocol::Message, protocol::PROTOCOL_VERSION, transport::Transport};
use anyhow::anyhow;

/// Host side: owns one session and answers requests strictly one at a time,
/// so a session never sees two operations interleave.
pub struct Skeleton<E: GameApi, T: Transport> {
    engine: E,
    transport: T,
}

impl<E: GameApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: E, transport: T) -> Self {
        Self { engine, transport }
    }

    /// Give the session back once serving is over.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Serve requests until the client goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.transport.send(Message::Hello { version }).await?;
            }
            Message::Hello { version } => {
                return Err(anyhow!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ));
            }
            _ => return Err(anyhow!("Expected handshake")),
        }

        while let Ok(msg) = self.transport.recv().await {
            debug!("host received {:?}", msg);
            let reply = match msg {
                Message::Shoot { row, col } => Message::ShotResp(self.engine.shoot(row, col).await?),
                Message::Guess { row, col } => Message::GuessResp(self.engine.guess(row, col).await?),
                Message::StatusReq => Message::StatusResp(self.engine.status().await?),
                Message::SnapshotReq => Message::SnapshotResp(self.engine.snapshot().await?),
                other => {
                    warn!("host cannot serve {:?}", other);
                    Message::Error(format!("unexpected request: {:?}", other))
                }
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}
