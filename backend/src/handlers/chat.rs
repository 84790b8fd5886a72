//! HTTP handlers for the chat endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::Language;

use crate::error::{AppError, AppResult};
use crate::services::ChatService;
use crate::AppState;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Language code: "en", "hi" or "ml"; anything else falls back to English
    pub lang: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub reply: String,
}

/// Handle one chat message
pub async fn send_chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(AppError::MissingField("Message is required"))?;

    let lang = request
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();

    let service = ChatService::new(state.sessions.clone(), state.ai.clone());
    let (session_id, reply) = service
        .send_message(message, lang, request.session_id.as_deref())
        .await;

    Ok(Json(ChatResponse { session_id, reply }))
}
