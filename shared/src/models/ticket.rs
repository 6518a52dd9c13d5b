//! Ticket and check-in models

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Cancelled,
}

/// Ticket as known to the check-in desk, keyed by its QR payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub booking_id: String,
    pub devotee_name: String,
    pub phone_number: String,
    pub temple_name: String,
    pub date: String,
    pub time: String,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_number: Option<u32>,
}

/// One entry of the scan history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedTicket {
    pub scan_id: String,
    #[serde(flatten)]
    pub ticket: TicketRecord,
    pub scanned_at: Timestamp,
}

/// Scan request carrying the decoded QR text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub qr_payload: String,
}
