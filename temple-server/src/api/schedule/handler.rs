//! Temple schedule handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::TempleAction;
use shared::models::{ScheduleEntry, ScheduleEntryInput};
use shared::types::EntityId;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

fn validate_entry(entry: &ScheduleEntryInput) -> AppResult<()> {
    validate_required_text(&entry.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&entry.event, "event", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/schedule
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ScheduleEntry>>> {
    Ok(Json(state.store().schedule()))
}

/// POST /api/schedule
pub async fn create(
    State(state): State<ServerState>,
    Json(entry): Json<ScheduleEntryInput>,
) -> AppResult<Json<ScheduleEntry>> {
    validate_entry(&entry)?;
    Ok(Json(
        state.store().run(TempleAction::AddScheduleEntry { entry })?,
    ))
}

/// PUT /api/schedule/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<EntityId>,
    Json(entry): Json<ScheduleEntryInput>,
) -> AppResult<Json<ScheduleEntry>> {
    validate_entry(&entry)?;
    Ok(Json(
        state
            .store()
            .run(TempleAction::UpdateScheduleEntry { id, entry })?,
    ))
}

/// DELETE /api/schedule/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<bool>> {
    state
        .store()
        .execute(TempleAction::DeleteScheduleEntry { id })?;
    Ok(Json(true))
}
