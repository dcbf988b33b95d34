use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/events")]
pub async fn list_events(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let events = state.events.find_all().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[get("/api/deadlines")]
pub async fn list_deadlines(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let deadlines = state.deadlines.find_all().await?;
    Ok(HttpResponse::Ok().json(deadlines))
}

#[get("/api/tutoring")]
pub async fn list_tutoring_sessions(
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let sessions = state.tutoring.find_all().await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
