use serde::{Deserialize, Serialize};

use crate::models::domain::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
}
