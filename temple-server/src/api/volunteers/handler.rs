//! Volunteer handlers

use axum::{Json, extract::State};
use shared::TempleAction;
use shared::models::{Volunteer, VolunteerCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_max_len,
    validate_required_text,
};

/// POST /api/volunteers - register a volunteer
pub async fn register(
    State(state): State<ServerState>,
    Json(volunteer): Json<VolunteerCreate>,
) -> AppResult<Json<Volunteer>> {
    validate_required_text(&volunteer.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&volunteer.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_max_len(&volunteer.email, "email", MAX_EMAIL_LEN)?;
    validate_max_len(&volunteer.availability, "availability", MAX_NOTE_LEN)?;
    for interest in &volunteer.interests {
        validate_max_len(interest, "interests", MAX_SHORT_TEXT_LEN)?;
    }

    Ok(Json(
        state
            .store()
            .run(TempleAction::RegisterVolunteer { volunteer })?,
    ))
}

/// GET /api/volunteers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Volunteer>>> {
    Ok(Json(state.store().volunteers()))
}
