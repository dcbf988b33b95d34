use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;

use casa_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers::{campus_handler, chat_handler},
    services::{
        model_service::{CompletionModel, PromptMessage},
        page_fetcher::{FetchOutcome, PageFetcher},
    },
};

/// Completion double: returns a canned reply and records every message
/// sequence it was asked to complete.
struct CannedModel {
    reply: String,
    seen: Mutex<Vec<Vec<PromptMessage>>>,
}

impl CannedModel {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn last_system_prompt(&self) -> String {
        let seen = self.seen.lock().expect("model log lock");
        let messages = seen.last().expect("model was called");
        messages
            .first()
            .expect("sequence starts with the system prompt")
            .content
            .clone()
    }
}

#[async_trait]
impl CompletionModel for CannedModel {
    async fn complete(&self, messages: Vec<PromptMessage>) -> AppResult<String> {
        self.seen.lock().expect("model log lock").push(messages);
        Ok(self.reply.clone())
    }
}

/// Fetcher double: resolves every URL to a fixed outcome and records requests.
struct RecordingFetcher {
    outcome: FetchOutcome,
    requested: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn content(text: &str) -> Self {
        Self::with_outcome(FetchOutcome::Content(text.to_string()))
    }

    fn with_outcome(outcome: FetchOutcome) -> Self {
        Self {
            outcome,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn fetched(&self) -> Vec<String> {
        self.requested.lock().expect("fetch log lock").clone()
    }
}

#[async_trait]
impl PageFetcher for RecordingFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        self.requested
            .lock()
            .expect("fetch log lock")
            .push(url.to_string());
        self.outcome.clone()
    }
}

fn test_config(with_key: bool) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        llm_api_base: "https://integrate.api.nvidia.com/v1".to_string(),
        llm_model: "test-model".to_string(),
        llm_api_key: with_key.then(|| SecretString::from("test_api_key".to_string())),
    }
}

async fn state_with(
    model: Arc<CannedModel>,
    fetcher: Arc<RecordingFetcher>,
) -> Arc<AppState> {
    Arc::new(
        AppState::with_components(Arc::new(test_config(true)), model, fetcher)
            .await
            .expect("app state builds"),
    )
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .service(chat_handler::send_chat_message)
                .service(chat_handler::chat_history)
                .service(campus_handler::list_events)
                .service(campus_handler::list_deadlines)
                .service(campus_handler::list_tutoring_sessions),
        )
        .await
    };
}

#[actix_web::test]
async fn chat_round_trip_appends_user_then_ai_messages() {
    let model = Arc::new(CannedModel::new("Tutoring runs today at 2 PM."));
    let fetcher = Arc::new(RecordingFetcher::content("unused"));
    let state = state_with(model.clone(), fetcher.clone()).await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({ "message": "What tutoring is available?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["userMessage"]["isAI"], serde_json::json!(false));
    assert_eq!(body["aiMessage"]["isAI"], serde_json::json!(true));
    assert_eq!(
        body["aiMessage"]["message"],
        serde_json::json!("Tutoring runs today at 2 PM.")
    );

    // No web candidates in this utterance: zero fetches, and the prompt holds
    // the tutoring bullets without any web-content block.
    assert!(fetcher.fetched().is_empty());
    let prompt = model.last_system_prompt();
    assert!(prompt.contains("- Calculus I & II with Dr. Sarah Johnson"));
    assert!(!prompt.contains("WEB PAGE CONTENT FROM"));

    let req = test::TestRequest::get().uri("/api/chat/history").to_request();
    let history: Vec<serde_json::Value> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["isAI"], serde_json::json!(false));
    assert_eq!(history[1]["isAI"], serde_json::json!(true));
}

#[actix_web::test]
async fn known_institution_fetches_exactly_the_mapped_page() {
    let model = Arc::new(CannedModel::new("Homecoming is on Saturday."));
    let fetcher = Arc::new(RecordingFetcher::content("Homecoming weekend schedule"));
    let state = state_with(model.clone(), fetcher.clone()).await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({
            "message": "What events are happening at Howard University?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(fetcher.fetched(), vec!["https://howard.edu/events".to_string()]);
    let prompt = model.last_system_prompt();
    assert!(prompt.contains("WEB PAGE CONTENT FROM https://howard.edu/events:"));
    assert!(prompt.contains("Homecoming weekend schedule"));
}

#[actix_web::test]
async fn literal_urls_are_fetched_and_failures_become_placeholders() {
    let model = Arc::new(CannedModel::new("That page was unavailable."));
    let fetcher = Arc::new(RecordingFetcher::with_outcome(FetchOutcome::Failed(
        casa_server::services::page_fetcher::FetchFailure::Status(404),
    )));
    let state = state_with(model.clone(), fetcher.clone()).await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({
            "message": "can you summarize https://campus.example/page for me"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        fetcher.fetched(),
        vec!["https://campus.example/page".to_string()]
    );
    let prompt = model.last_system_prompt();
    assert!(prompt.contains("WEB PAGE CONTENT FROM https://campus.example/page:\n["));
    assert!(prompt.contains("[Unable to fetch page: HTTP 404]"));
}

#[actix_web::test]
async fn missing_credential_fails_the_turn_without_an_ai_record() {
    // Real model service, no API key configured. The utterance has no web
    // candidates, so no outbound traffic happens either.
    let state = Arc::new(
        AppState::new(test_config(false))
            .await
            .expect("app state builds"),
    );
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({ "message": "hello there" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .expect("error message present")
        .contains("NVIDIA_API_KEY"));

    let req = test::TestRequest::get().uri("/api/chat/history").to_request();
    let history: Vec<serde_json::Value> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["isAI"], serde_json::json!(false));
}

#[actix_web::test]
async fn list_endpoints_return_seeded_records() {
    let model = Arc::new(CannedModel::new("unused"));
    let fetcher = Arc::new(RecordingFetcher::content("unused"));
    let state = state_with(model, fetcher).await;
    let app = test_app!(state);

    let events: Vec<serde_json::Value> = test::read_body_json(
        test::call_service(&app, test::TestRequest::get().uri("/api/events").to_request()).await,
    )
    .await;
    assert_eq!(events.len(), 3);
    assert!(events[0].get("title").is_some());

    let deadlines: Vec<serde_json::Value> = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::get().uri("/api/deadlines").to_request(),
        )
        .await,
    )
    .await;
    assert_eq!(deadlines.len(), 2);
    assert!(deadlines[0].get("dueDate").is_some());

    let tutoring: Vec<serde_json::Value> = test::read_body_json(
        test::call_service(
            &app,
            test::TestRequest::get().uri("/api/tutoring").to_request(),
        )
        .await,
    )
    .await;
    assert_eq!(tutoring.len(), 2);
}

#[actix_web::test]
async fn malformed_chat_requests_are_rejected_before_any_side_effect() {
    let model = Arc::new(CannedModel::new("unused"));
    let fetcher = Arc::new(RecordingFetcher::content("unused"));
    let state = state_with(model, fetcher.clone()).await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({ "message": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(serde_json::json!({ "text": "wrong field" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted and nothing was fetched.
    let req = test::TestRequest::get().uri("/api/chat/history").to_request();
    let history: Vec<serde_json::Value> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(history.is_empty());
    assert!(fetcher.fetched().is_empty());
}
