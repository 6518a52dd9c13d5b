//! Prasad timings handlers

use axum::{Json, extract::State};
use shared::TempleAction;
use shared::models::PrasadTimings;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/prasad-timings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<PrasadTimings>> {
    Ok(Json(state.store().prasad_timings()))
}

/// PUT /api/prasad-timings - replace all four timings
pub async fn update(
    State(state): State<ServerState>,
    Json(timings): Json<PrasadTimings>,
) -> AppResult<Json<PrasadTimings>> {
    for (value, field) in [
        (&timings.morning, "morning"),
        (&timings.evening, "evening"),
        (&timings.bhandara_day, "bhandaraDay"),
        (&timings.bhandara_time, "bhandaraTime"),
    ] {
        validate_required_text(value, field, MAX_SHORT_TEXT_LEN)?;
    }
    let updated = state
        .store()
        .run(TempleAction::UpdatePrasadTimings { timings })?;
    Ok(Json(updated))
}
