//! Donation handlers

use axum::{Json, extract::State};
use shared::TempleAction;
use shared::models::{Donation, DonationAnalytics, DonationCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// POST /api/donations - record a donation
pub async fn donate(
    State(state): State<ServerState>,
    Json(donation): Json<DonationCreate>,
) -> AppResult<Json<Donation>> {
    validate_required_text(&donation.donor_name, "donorName", MAX_NAME_LEN)?;
    Ok(Json(
        state.store().run(TempleAction::RecordDonation { donation })?,
    ))
}

/// GET /api/donations/analytics - totals over recorded donations
pub async fn analytics(State(state): State<ServerState>) -> AppResult<Json<DonationAnalytics>> {
    Ok(Json(state.store().donation_analytics()))
}
