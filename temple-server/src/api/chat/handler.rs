//! Chat API Handlers

use axum::{Json, extract::State};
use shared::AppError;
use shared::models::{ChatRequest, ChatResponse};

use super::assistant;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

/// POST /api/chat - answer the last message of the conversation
pub async fn chat(
    State(state): State<ServerState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let last = request
        .messages
        .last()
        .ok_or_else(|| AppError::required("messages"))?;
    validate_required_text(&last.text, "text", MAX_NOTE_LEN)?;

    Ok(Json(assistant::answer(&state, &last.text)))
}
