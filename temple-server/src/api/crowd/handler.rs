//! Crowd density handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::TempleAction;
use shared::models::{ZoneDensity, ZoneDensityUpdate, ZoneDensityView};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/crowd - zone densities with their level
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ZoneDensityView>>> {
    Ok(Json(state.store().zones()))
}

/// PUT /api/crowd/:zone - set a zone's density (0..=1)
pub async fn update(
    State(state): State<ServerState>,
    Path(zone): Path<String>,
    Json(update): Json<ZoneDensityUpdate>,
) -> AppResult<Json<ZoneDensityView>> {
    let zone: ZoneDensity = state.store().run(TempleAction::UpdateZoneDensity {
        zone,
        density: update.density,
    })?;
    Ok(Json(zone.into()))
}
