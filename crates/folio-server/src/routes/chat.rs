//! Chat Routes - Questions about the profile owner

use axum::{extract::State, routing::post, Json, Router};

use crate::config::GROQ_API_KEY;
use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::AppState;

/// Answer a question about the profile owner
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model answer", body = ChatResponse),
        (status = 500, description = "Credential missing or completion service failed", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let service = state
        .chat_service
        .as_ref()
        .ok_or(ApiError::NotConfigured(GROQ_API_KEY))?;

    tracing::debug!(
        "Chat question ({} chars) for model {}",
        payload.message.len(),
        service.model_id()
    );

    let answer = service.ask(&payload.message).await?;

    Ok(Json(ChatResponse { answer }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}
