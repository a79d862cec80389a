//! Assistant chat handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Forward a security question to the assistant, with the scanned URL as
/// optional context.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::ValidationError("Message required".to_string()))?;

    let reply = state.assistant.ask(&message, request.url.as_deref()).await?;

    Ok(Json(ChatResponse { reply }))
}
