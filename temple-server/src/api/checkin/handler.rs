//! Check-in API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::TempleAction;
use shared::models::{ScanRequest, ScannedTicket, TicketRecord};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

/// POST /api/checkin/scan - look up a QR payload
pub async fn scan(
    State(state): State<ServerState>,
    Json(payload): Json<ScanRequest>,
) -> AppResult<Json<ScannedTicket>> {
    validate_required_text(&payload.qr_payload, "qrPayload", MAX_NOTE_LEN)?;
    let scanned = state.store().run(TempleAction::ScanTicket {
        qr_payload: payload.qr_payload,
    })?;
    Ok(Json(scanned))
}

/// GET /api/checkin/history - scans of this session, newest first
pub async fn history(State(state): State<ServerState>) -> AppResult<Json<Vec<ScannedTicket>>> {
    Ok(Json(state.store().scan_history()))
}

/// POST /api/checkin/:booking_id - mark the ticket used
pub async fn check_in(
    State(state): State<ServerState>,
    Path(booking_id): Path<String>,
) -> AppResult<Json<TicketRecord>> {
    let record = state
        .store()
        .run(TempleAction::CheckInTicket { booking_id })?;
    Ok(Json(record))
}
