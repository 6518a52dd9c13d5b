//! Slot API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::TempleAction;
use shared::models::{
    BookingEntry, BookingForm, ETokenBooking, SlotCreate, SlotQuery, SlotView, TimeSlot,
};
use shared::types::EntityId;

use crate::core::ServerState;
use crate::store::StoreError;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/slots - slots with utilization and availability
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<Vec<SlotView>>> {
    Ok(Json(state.store().list_slots(query.date.as_deref())))
}

/// GET /api/slots/bookings - every e-token booking, newest first
pub async fn bookings(State(state): State<ServerState>) -> AppResult<Json<Vec<BookingEntry>>> {
    Ok(Json(state.store().bookings()))
}

/// POST /api/slots - create a slot
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SlotCreate>,
) -> AppResult<Json<TimeSlot>> {
    validate_required_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.time, "time", MAX_SHORT_TEXT_LEN)?;

    let slot = state.store().run(TempleAction::CreateSlot {
        date: payload.date,
        time: payload.time,
        capacity: payload.capacity,
    })?;
    Ok(Json(slot))
}

/// DELETE /api/slots/:id - delete a slot
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<bool>> {
    state
        .store()
        .execute(TempleAction::DeleteSlot { slot_id: id })?;
    Ok(Json(true))
}

/// POST /api/slots/:id/book - book an e-token
pub async fn book(
    State(state): State<ServerState>,
    Path(id): Path<EntityId>,
    Json(form): Json<BookingForm>,
) -> AppResult<Json<ETokenBooking>> {
    if !form.is_complete() {
        return Err(StoreError::BookingIncomplete.into());
    }
    validate_required_text(&form.devotee_name, "devoteeName", MAX_NAME_LEN)?;
    validate_required_text(&form.phone_number, "phoneNumber", MAX_SHORT_TEXT_LEN)?;

    let booking = state
        .store()
        .run(TempleAction::BookSlot { slot_id: id, form })?;
    Ok(Json(booking))
}
