#![cfg(feature = "std")]

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::{GameSession, GameStatus, SessionState};
use crate::protocol::{GameApi, GuessResult, ShotResult};

/// A session shared between tasks. Clones refer to the same session and
/// every operation holds the lock for its whole duration.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub async fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut session = self.inner.lock().await;
        f(&mut session)
    }
}

#[async_trait::async_trait]
impl GameApi for SharedSession {
    async fn shoot(&mut self, row: i8, col: i8) -> anyhow::Result<ShotResult> {
        Ok(self.with(|s| s.shoot(row, col)).await)
    }

    async fn guess(&mut self, row: i8, col: i8) -> anyhow::Result<GuessResult> {
        Ok(self.with(|s| s.guess(row, col)).await)
    }

    async fn status(&mut self) -> anyhow::Result<GameStatus> {
        Ok(self.with(|s| GameSession::status(s)).await)
    }

    async fn snapshot(&mut self) -> anyhow::Result<SessionState> {
        Ok(self.with(|s| s.state()).await)
    }
}
