//! Parking occupancy and pricing

use serde::{Deserialize, Serialize};

/// Hourly rates in rupees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingPricing {
    pub two_wheeler: f64,
    pub four_wheeler: f64,
}

impl ParkingPricing {
    /// Both rates finite and non-negative
    pub fn is_valid(&self) -> bool {
        [self.two_wheeler, self.four_wheeler]
            .iter()
            .all(|p| p.is_finite() && *p >= 0.0)
    }
}

impl Default for ParkingPricing {
    fn default() -> Self {
        Self {
            two_wheeler: 20.0,
            four_wheeler: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingStatus {
    pub total_spaces: u32,
    pub occupied_spaces: u32,
    pub available_spaces: u32,
    pub pricing: ParkingPricing,
}

impl ParkingStatus {
    pub fn new(total_spaces: u32, occupied_spaces: u32, pricing: ParkingPricing) -> Self {
        Self {
            total_spaces,
            occupied_spaces,
            available_spaces: total_spaces.saturating_sub(occupied_spaces),
            pricing,
        }
    }
}

/// Occupancy update payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingOccupancyUpdate {
    pub occupied_spaces: u32,
}
