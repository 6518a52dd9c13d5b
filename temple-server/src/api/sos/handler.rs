//! SOS API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::TempleAction;
use shared::models::{AlertSummary, SosAlert, SosCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/sos - raise an alert for the calling user
pub async fn trigger(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<SosCreate>,
) -> AppResult<Json<SosAlert>> {
    let alert = state.store().run(TempleAction::TriggerSos {
        user_id: user.username.clone(),
        user_name: user.username,
        location: payload.location,
    })?;
    Ok(Json(alert))
}

/// GET /api/sos - alerts newest first with per-status counts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AlertSummary>> {
    Ok(Json(state.store().alert_summary()))
}

/// POST /api/sos/:id/respond
pub async fn respond(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SosAlert>> {
    Ok(Json(
        state
            .store()
            .run(TempleAction::RespondToAlert { alert_id: id })?,
    ))
}

/// POST /api/sos/:id/resolve
pub async fn resolve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SosAlert>> {
    Ok(Json(
        state
            .store()
            .run(TempleAction::ResolveAlert { alert_id: id })?,
    ))
}
