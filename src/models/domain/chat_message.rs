use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message, false)
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    fn new(message: impl Into<String>, is_ai: bool) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            is_ai,
            timestamp: Utc::now(),
        }
    }
}
