//! Virtual puja bookings

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Select value meaning "no pandit"
pub const NOT_ASSIGNED: &str = "Not Assigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PujaType {
    Rudrabhishek,
    Satyanarayan,
    GrihaShanti,
}

impl PujaType {
    /// Offering in rupees
    pub fn price(&self) -> u32 {
        match self {
            PujaType::Rudrabhishek => 1100,
            PujaType::Satyanarayan => 2100,
            PujaType::GrihaShanti => 5100,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PujaType::Rudrabhishek => "Rudrabhishek Puja",
            PujaType::Satyanarayan => "Satyanarayan Puja",
            PujaType::GrihaShanti => "Griha Shanti Puja",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PujaStatus {
    Pending,
    Assigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PujaBooking {
    pub id: String,
    pub puja_type: PujaType,
    pub devotee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pandit: Option<String>,
    pub status: PujaStatus,
    pub price: u32,
    pub created_at: Timestamp,
}

/// Create puja booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PujaBookingCreate {
    pub puja_type: PujaType,
    pub devotee_name: String,
    #[serde(default)]
    pub preferred_pandit: Option<String>,
}

/// Pandit assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanditAssignment {
    pub pandit: String,
}
