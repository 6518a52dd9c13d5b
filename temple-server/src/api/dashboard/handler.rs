use axum::{Json, extract::State};
use shared::models::DashboardStats;
use shared::util::today;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/dashboard - admin summary figures
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.store().dashboard(&state.config, &today())))
}
