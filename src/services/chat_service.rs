use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::ChatMessage,
    repositories::{
        ChatMessageRepository, DeadlineRepository, EventRepository, TutoringSessionRepository,
    },
    services::{context_service::ContextService, model_service::CompletionModel},
};

/// Runs one chat turn: persist the user's message, enrich the context, call
/// the completion model, persist the reply. Either both records exist
/// afterwards or the turn failed after the user record — there is no partial
/// success shape on the wire.
pub struct ChatService {
    messages: Arc<dyn ChatMessageRepository>,
    events: Arc<dyn EventRepository>,
    deadlines: Arc<dyn DeadlineRepository>,
    tutoring: Arc<dyn TutoringSessionRepository>,
    context: Arc<ContextService>,
    model: Arc<dyn CompletionModel>,
}

impl ChatService {
    pub fn new(
        messages: Arc<dyn ChatMessageRepository>,
        events: Arc<dyn EventRepository>,
        deadlines: Arc<dyn DeadlineRepository>,
        tutoring: Arc<dyn TutoringSessionRepository>,
        context: Arc<ContextService>,
        model: Arc<dyn CompletionModel>,
    ) -> Self {
        Self {
            messages,
            events,
            deadlines,
            tutoring,
            context,
            model,
        }
    }

    pub async fn send_message(&self, message: &str) -> AppResult<(ChatMessage, ChatMessage)> {
        let user_message = self.messages.create(ChatMessage::user(message)).await?;

        let (events, deadlines, tutoring, history) = futures::try_join!(
            self.events.find_all(),
            self.deadlines.find_all(),
            self.tutoring.find_all(),
            self.messages.find_all(),
        )?;

        let fetches = self.context.enrich(message).await;
        log::info!(
            "chat turn {}: {} page(s) fetched",
            user_message.id,
            fetches.len()
        );

        let system_prompt =
            self.context
                .build_system_prompt(&events, &deadlines, &tutoring, &fetches);
        let prompt_messages = self
            .context
            .build_messages(system_prompt, &history, &user_message);

        let reply = self.model.complete(prompt_messages).await?;

        let ai_message = self
            .messages
            .create(ChatMessage::assistant(reply))
            .await?;

        Ok((user_message, ai_message))
    }

    pub async fn history(&self) -> AppResult<Vec<ChatMessage>> {
        self.messages.find_all().await
    }
}
