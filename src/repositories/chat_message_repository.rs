use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::ChatMessage};

#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    async fn create(&self, message: ChatMessage) -> AppResult<ChatMessage>;
    async fn find_all(&self) -> AppResult<Vec<ChatMessage>>;
}

/// Process-local store. Messages are append-only and returned in insertion
/// order; everything is lost on restart.
pub struct MemoryChatMessageRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl MemoryChatMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryChatMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatMessageRepository for MemoryChatMessageRepository {
    async fn create(&self, message: ChatMessage) -> AppResult<ChatMessage> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(message)
    }

    async fn find_all(&self) -> AppResult<Vec<ChatMessage>> {
        let messages = self.messages.read().await;
        Ok(messages.clone())
    }
}
