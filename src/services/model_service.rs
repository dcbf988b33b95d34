use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    constants::limits::{MODEL_MAX_TOKENS, MODEL_TEMPERATURE},
    errors::{AppError, AppResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl PromptRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::System => "system",
            PromptRole::User => "user",
            PromptRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Assistant,
            content: content.into(),
        }
    }
}

/// Opaque text-completion dependency. One implementation talks to the hosted
/// API; tests substitute their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, messages: Vec<PromptMessage>) -> AppResult<String>;
}

/// Talks to an OpenAI-compatible chat-completions endpoint with a fixed model
/// id, temperature and completion-token ceiling. No retries: a failed call
/// fails the chat turn.
pub struct ModelService {
    config: Arc<Config>,
}

impl ModelService {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn client(&self, api_key: &SecretString) -> Client<OpenAIConfig> {
        let openai_config = OpenAIConfig::new()
            .with_api_base(self.config.llm_api_base.as_str())
            .with_api_key(api_key.expose_secret());
        Client::with_config(openai_config)
    }
}

#[async_trait]
impl CompletionModel for ModelService {
    async fn complete(&self, messages: Vec<PromptMessage>) -> AppResult<String> {
        let api_key = self
            .config
            .llm_api_key
            .as_ref()
            .ok_or_else(|| AppError::Configuration("NVIDIA_API_KEY is not set".to_string()))?;

        let body = serde_json::json!({
            "model": self.config.llm_model,
            "messages": messages
                .iter()
                .map(|message| {
                    serde_json::json!({
                        "role": message.role.as_str(),
                        "content": message.content,
                    })
                })
                .collect::<Vec<_>>(),
            "temperature": MODEL_TEMPERATURE,
            "max_tokens": MODEL_MAX_TOKENS,
        });

        let response: serde_json::Value = self
            .client(api_key)
            .chat()
            .create_byot(body)
            .await
            .map_err(|err| AppError::ModelError(err.to_string()))?;

        response["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(str::to_owned)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::ModelError("completion response had no message content".to_string())
            })
    }
}
