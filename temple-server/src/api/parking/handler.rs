//! Parking handlers

use axum::{Json, extract::State};
use shared::TempleAction;
use shared::models::{ParkingOccupancyUpdate, ParkingPricing, ParkingStatus};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/parking - spaces and pricing
pub async fn status(State(state): State<ServerState>) -> AppResult<Json<ParkingStatus>> {
    Ok(Json(state.store().parking()))
}

/// PUT /api/parking/pricing
pub async fn update_pricing(
    State(state): State<ServerState>,
    Json(pricing): Json<ParkingPricing>,
) -> AppResult<Json<ParkingStatus>> {
    Ok(Json(
        state
            .store()
            .run(TempleAction::UpdateParkingPricing { pricing })?,
    ))
}

/// PUT /api/parking/occupancy
pub async fn update_occupancy(
    State(state): State<ServerState>,
    Json(update): Json<ParkingOccupancyUpdate>,
) -> AppResult<Json<ParkingStatus>> {
    Ok(Json(state.store().run(TempleAction::UpdateParkingOccupancy {
        occupied_spaces: update.occupied_spaces,
    })?))
}
