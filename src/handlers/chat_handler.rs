use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

#[post("/api/chat")]
pub async fn send_chat_message(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (user_message, ai_message) = state.chat_service.send_message(&request.message).await?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        user_message,
        ai_message,
    }))
}

#[get("/api/chat/history")]
pub async fn chat_history(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let messages = state.chat_service.history().await?;
    Ok(HttpResponse::Ok().json(messages))
}
