//! Virtual puja handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{PanditAssignment, PujaBooking, PujaBookingCreate, PujaType};
use shared::{AppError, ErrorCode, TempleAction};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};

/// Booking payload with the puja type still unparsed, so an unknown type
/// answers with its own error code
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PujaBookingPayload {
    pub puja_type: String,
    pub devotee_name: String,
    #[serde(default)]
    pub preferred_pandit: Option<String>,
}

fn parse_puja_type(value: &str) -> AppResult<PujaType> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|_| {
        AppError::with_message(
            ErrorCode::UnknownPujaType,
            format!("Unknown puja type: {}", value),
        )
    })
}

/// GET /api/virtual-puja/pandits
pub async fn pandits(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.store().pandits()))
}

/// POST /api/virtual-puja - book a puja
pub async fn book(
    State(state): State<ServerState>,
    Json(payload): Json<PujaBookingPayload>,
) -> AppResult<Json<PujaBooking>> {
    validate_required_text(&payload.devotee_name, "devoteeName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.preferred_pandit, "preferredPandit", MAX_NAME_LEN)?;

    let request = PujaBookingCreate {
        puja_type: parse_puja_type(&payload.puja_type)?,
        devotee_name: payload.devotee_name,
        preferred_pandit: payload.preferred_pandit,
    };
    Ok(Json(state.store().run(TempleAction::BookPuja { request })?))
}

/// GET /api/virtual-puja - every booking
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PujaBooking>>> {
    Ok(Json(state.store().puja_bookings()))
}

/// PUT /api/virtual-puja/:id/assign - assign or clear the pandit
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PanditAssignment>,
) -> AppResult<Json<PujaBooking>> {
    let booking = state.store().run(TempleAction::AssignPandit {
        booking_id: id,
        pandit: payload.pandit,
    })?;
    Ok(Json(booking))
}
