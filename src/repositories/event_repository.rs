use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::Event};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: Event) -> AppResult<Event>;
    async fn find_all(&self) -> AppResult<Vec<Event>>;
}

pub struct MemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn create(&self, event: Event) -> AppResult<Event> {
        let mut events = self.events.write().await;
        events.push(event.clone());
        Ok(event)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }
}
