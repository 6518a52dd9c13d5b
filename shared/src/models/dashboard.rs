//! Admin dashboard summary

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// Operational alert derived from the live state (not an SOS)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardAlert {
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub live_devotee_count: u32,
    pub total_bookings_today: u64,
    /// Estimated queue wait in minutes
    pub average_wait_time: u64,
    /// Booked share of all slot capacity, in percent
    pub capacity_utilization: u32,
    pub active_sos_alerts: usize,
    pub alerts: Vec<DashboardAlert>,
}
