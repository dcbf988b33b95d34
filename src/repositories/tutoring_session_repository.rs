use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::TutoringSession};

#[async_trait]
pub trait TutoringSessionRepository: Send + Sync {
    async fn create(&self, session: TutoringSession) -> AppResult<TutoringSession>;
    async fn find_all(&self) -> AppResult<Vec<TutoringSession>>;
}

pub struct MemoryTutoringSessionRepository {
    sessions: RwLock<Vec<TutoringSession>>,
}

impl MemoryTutoringSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryTutoringSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TutoringSessionRepository for MemoryTutoringSessionRepository {
    async fn create(&self, session: TutoringSession) -> AppResult<TutoringSession> {
        let mut sessions = self.sessions.write().await;
        sessions.push(session.clone());
        Ok(session)
    }

    async fn find_all(&self) -> AppResult<Vec<TutoringSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.clone())
    }
}
