#![cfg(feature = "std")]

use crate::core::{GameStatus, SessionState};
use crate::protocol::{GameApi, GuessResult, Message, ShotResult, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Client side: forwards every [`GameApi`] call to a [`Skeleton`](crate::Skeleton)
/// over a transport.
pub struct Stub<T: Transport> {
    transport: T,
    handshaken: bool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            handshaken: false,
        }
    }

    async fn ensure_handshake(&mut self) -> anyhow::Result<()> {
        if self.handshaken {
            return Ok(());
        }
        self.transport
            .send(Message::Hello {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.handshaken = true;
                Ok(())
            }
            other => Err(anyhow::anyhow!("Unexpected handshake reply: {:?}", other)),
        }
    }

    async fn request(&mut self, msg: Message) -> anyhow::Result<Message> {
        self.ensure_handshake().await?;
        self.transport.send(msg).await?;
        match self.transport.recv().await? {
            Message::Error(reason) => Err(anyhow::anyhow!("Host error: {}", reason)),
            reply => Ok(reply),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn shoot(&mut self, row: i8, col: i8) -> anyhow::Result<ShotResult> {
        match self.request(Message::Shoot { row, col }).await? {
            Message::ShotResp(res) => Ok(res),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn guess(&mut self, row: i8, col: i8) -> anyhow::Result<GuessResult> {
        match self.request(Message::Guess { row, col }).await? {
            Message::GuessResp(res) => Ok(res),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn status(&mut self) -> anyhow::Result<GameStatus> {
        match self.request(Message::StatusReq).await? {
            Message::StatusResp(status) => Ok(status),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn snapshot(&mut self) -> anyhow::Result<SessionState> {
        match self.request(Message::SnapshotReq).await? {
            Message::SnapshotResp(state) => Ok(state),
            other => Err(anyhow::anyhow!("Unexpected message: {:?}", other)),
        }
    }
}
