use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        seed, ChatMessageRepository, DeadlineRepository, EventRepository,
        MemoryChatMessageRepository, MemoryDeadlineRepository, MemoryEventRepository,
        MemoryTutoringSessionRepository, TutoringSessionRepository,
    },
    services::{
        chat_service::ChatService,
        context_service::ContextService,
        model_service::{CompletionModel, ModelService},
        page_fetcher::{HttpPageFetcher, PageFetcher},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub events: Arc<dyn EventRepository>,
    pub deadlines: Arc<dyn DeadlineRepository>,
    pub tutoring: Arc<dyn TutoringSessionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);
        let model: Arc<dyn CompletionModel> = Arc::new(ModelService::new(config.clone()));
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new());
        Self::with_components(config, model, fetcher).await
    }

    /// Wires the application with injected network-facing components. The
    /// repositories are constructed (and seeded) here; they live for the
    /// process lifetime and are swappable for a durable backend without
    /// touching call sites.
    pub async fn with_components(
        config: Arc<Config>,
        model: Arc<dyn CompletionModel>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> AppResult<Self> {
        let messages: Arc<dyn ChatMessageRepository> =
            Arc::new(MemoryChatMessageRepository::new());
        let events: Arc<dyn EventRepository> = Arc::new(MemoryEventRepository::new());
        let deadlines: Arc<dyn DeadlineRepository> = Arc::new(MemoryDeadlineRepository::new());
        let tutoring: Arc<dyn TutoringSessionRepository> =
            Arc::new(MemoryTutoringSessionRepository::new());

        seed::seed_demo_data(events.as_ref(), deadlines.as_ref(), tutoring.as_ref()).await?;

        let context = Arc::new(ContextService::new(fetcher));
        let chat_service = Arc::new(ChatService::new(
            messages,
            events.clone(),
            deadlines.clone(),
            tutoring.clone(),
            context,
            model,
        ));

        Ok(Self {
            chat_service,
            events,
            deadlines,
            tutoring,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_seeds_campus_records() {
        let state = AppState::new(Config::test_config()).await.unwrap();

        assert_eq!(state.events.find_all().await.unwrap().len(), 3);
        assert_eq!(state.deadlines.find_all().await.unwrap().len(), 2);
        assert_eq!(state.tutoring.find_all().await.unwrap().len(), 2);
    }
}
