use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::Deadline};

#[async_trait]
pub trait DeadlineRepository: Send + Sync {
    async fn create(&self, deadline: Deadline) -> AppResult<Deadline>;
    async fn find_all(&self) -> AppResult<Vec<Deadline>>;
}

pub struct MemoryDeadlineRepository {
    deadlines: RwLock<Vec<Deadline>>,
}

impl MemoryDeadlineRepository {
    pub fn new() -> Self {
        Self {
            deadlines: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryDeadlineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeadlineRepository for MemoryDeadlineRepository {
    async fn create(&self, deadline: Deadline) -> AppResult<Deadline> {
        let mut deadlines = self.deadlines.write().await;
        deadlines.push(deadline.clone());
        Ok(deadline)
    }

    async fn find_all(&self) -> AppResult<Vec<Deadline>> {
        let deadlines = self.deadlines.read().await;
        Ok(deadlines.clone())
    }
}
