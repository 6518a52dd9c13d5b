//! SOS alert models

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

pub const ALERT_MESSAGE: &str = "Emergency alert triggered from temple premises";
pub const ALERT_MESSAGE_NO_LOCATION: &str =
    "Emergency alert triggered from temple premises (location unavailable)";

/// Alert lifecycle: active -> responded -> resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Responded,
    Resolved,
}

impl AlertStatus {
    /// The single status this one may advance to
    pub fn next(self) -> Option<AlertStatus> {
        match self {
            AlertStatus::Active => Some(AlertStatus::Responded),
            AlertStatus::Responded => Some(AlertStatus::Resolved),
            AlertStatus::Resolved => None,
        }
    }

    pub fn can_advance_to(self, target: AlertStatus) -> bool {
        self.next() == Some(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in metres
    pub accuracy: f64,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlert {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub location: Option<LocationData>,
    pub status: AlertStatus,
    pub timestamp: Timestamp,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<Timestamp>,
}

/// SOS trigger payload; user identity comes from the caller's token
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosCreate {
    pub location: Option<LocationData>,
}

/// Alert list with per-status counts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub alerts: Vec<SosAlert>,
    pub active: usize,
    pub responded: usize,
    pub resolved: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: Vec<SosAlert>) -> Self {
        let count = |s: AlertStatus| alerts.iter().filter(|a| a.status == s).count();
        Self {
            active: count(AlertStatus::Active),
            responded: count(AlertStatus::Responded),
            resolved: count(AlertStatus::Resolved),
            alerts,
        }
    }
}
