//! Queue API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use shared::TempleAction;
use shared::models::{QueueMessageUpdate, QueueQuery, QueueStatus, QueueView};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_max_len};

/// GET /api/queue - queue state with estimated wait
///
/// `queueLength` and `averageProcessingTime` default to the configured values.
pub async fn status(
    State(state): State<ServerState>,
    Query(query): Query<QueueQuery>,
) -> AppResult<Json<QueueView>> {
    let queue_length = query.queue_length.unwrap_or(state.config.queue_length);
    let average = query
        .average_processing_time
        .unwrap_or(state.config.average_processing_minutes);
    Ok(Json(state.store().queue_view(queue_length, average)))
}

/// POST /api/queue/next - call the next token
pub async fn call_next(State(state): State<ServerState>) -> AppResult<Json<QueueStatus>> {
    Ok(Json(state.store().run(TempleAction::CallNextToken)?))
}

/// POST /api/queue/toggle - pause or resume
pub async fn toggle(State(state): State<ServerState>) -> AppResult<Json<QueueStatus>> {
    Ok(Json(state.store().run(TempleAction::ToggleQueue)?))
}

/// POST /api/queue/message - replace the display message
pub async fn update_message(
    State(state): State<ServerState>,
    Json(payload): Json<QueueMessageUpdate>,
) -> AppResult<Json<QueueStatus>> {
    validate_max_len(&payload.message, "message", MAX_NOTE_LEN)?;
    let status = state.store().run(TempleAction::UpdateQueueMessage {
        message: payload.message,
    })?;
    Ok(Json(status))
}

/// POST /api/queue/reset - back to token 0, active
pub async fn reset(State(state): State<ServerState>) -> AppResult<Json<QueueStatus>> {
    Ok(Json(state.store().run(TempleAction::ResetQueue)?))
}
