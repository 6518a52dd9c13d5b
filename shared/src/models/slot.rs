//! Time slot and e-token booking models

use serde::{Deserialize, Serialize};

use super::ticket::TicketStatus;
use crate::types::{EntityId, Timestamp};

/// Utilization at or above which a slot is "Filling Fast"
pub const FILLING_FAST_THRESHOLD: u32 = 90;

/// Utilization at or above which the admin colour band is "medium"
pub const MEDIUM_UTILIZATION_THRESHOLD: u32 = 70;

/// A bookable darshan time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: EntityId,
    /// Slot date (`YYYY-MM-DD`)
    pub date: String,
    /// Start time (`HH:MM`)
    pub time: String,
    pub capacity: u32,
    pub current_bookings: u32,
}

impl TimeSlot {
    /// Booked share of capacity, rounded to the nearest percent.
    ///
    /// A zero-capacity slot reports 100 so it reads as full.
    pub fn utilization(&self) -> u32 {
        if self.capacity == 0 {
            return 100;
        }
        (self.current_bookings as f64 / self.capacity as f64 * 100.0).round() as u32
    }

    pub fn is_available(&self) -> bool {
        self.current_bookings < self.capacity
    }

    pub fn spots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.current_bookings)
    }

    /// Devotee-facing availability badge
    pub fn availability(&self) -> SlotAvailability {
        if !self.is_available() {
            SlotAvailability::Full
        } else if self.utilization() >= FILLING_FAST_THRESHOLD {
            SlotAvailability::FillingFast
        } else {
            SlotAvailability::Available
        }
    }

    /// Admin-facing status badge
    pub fn status(&self) -> SlotStatus {
        if self.is_available() {
            SlotStatus::Active
        } else {
            SlotStatus::Full
        }
    }

    /// Colour band for the admin utilization bar
    pub fn utilization_band(&self) -> UtilizationBand {
        match self.utilization() {
            u if u >= FILLING_FAST_THRESHOLD => UtilizationBand::High,
            u if u >= MEDIUM_UTILIZATION_THRESHOLD => UtilizationBand::Medium,
            _ => UtilizationBand::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotAvailability {
    Available,
    #[serde(rename = "Filling Fast")]
    FillingFast,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Active,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationBand {
    Low,
    Medium,
    High,
}

/// Slot with its derived figures, as returned by the slot listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    #[serde(flatten)]
    pub slot: TimeSlot,
    pub utilization: u32,
    pub spots_remaining: u32,
    pub is_available: bool,
    pub availability: SlotAvailability,
    pub status: SlotStatus,
    pub utilization_band: UtilizationBand,
}

impl From<TimeSlot> for SlotView {
    fn from(slot: TimeSlot) -> Self {
        Self {
            utilization: slot.utilization(),
            spots_remaining: slot.spots_remaining(),
            is_available: slot.is_available(),
            availability: slot.availability(),
            status: slot.status(),
            utilization_band: slot.utilization_band(),
            slot,
        }
    }
}

/// Create slot payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCreate {
    pub date: String,
    pub time: String,
    pub capacity: u32,
}

/// Slot listing query (`?date=YYYY-MM-DD`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: Option<String>,
}

/// Devotee booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub devotee_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub is_senior_citizen: bool,
    #[serde(default)]
    pub needs_wheelchair: bool,
}

impl BookingForm {
    /// Name and phone are both required (whitespace does not count)
    pub fn is_complete(&self) -> bool {
        !self.devotee_name.trim().is_empty() && !self.phone_number.trim().is_empty()
    }
}

/// Confirmed e-token booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ETokenBooking {
    pub booking_id: String,
    pub slot_id: EntityId,
    pub date: String,
    pub time: String,
    pub devotee_name: String,
    pub phone_number: String,
    pub is_senior_citizen: bool,
    pub needs_wheelchair: bool,
    pub token_number: u32,
    pub qr_payload: String,
    pub created_at: Timestamp,
}

/// Booking row for the admin bookings table: the booking and its ticket status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    #[serde(flatten)]
    pub booking: ETokenBooking,
    pub status: TicketStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(capacity: u32, current_bookings: u32) -> TimeSlot {
        TimeSlot {
            id: 1,
            date: "2025-01-20".to_string(),
            time: "06:00".to_string(),
            capacity,
            current_bookings,
        }
    }

    #[test]
    fn test_full_slot() {
        let s = slot(120, 120);
        assert!(!s.is_available());
        assert_eq!(s.availability(), SlotAvailability::Full);
        assert_eq!(s.status(), SlotStatus::Full);
        assert_eq!(s.spots_remaining(), 0);
        assert_eq!(s.utilization(), 100);
    }

    #[test]
    fn test_filling_fast() {
        let s = slot(100, 95);
        assert_eq!(s.utilization(), 95);
        assert_eq!(s.availability(), SlotAvailability::FillingFast);
        assert_eq!(s.status(), SlotStatus::Active);
        assert_eq!(s.utilization_band(), UtilizationBand::High);
    }

    #[test]
    fn test_available_and_rounding() {
        let s = slot(80, 45);
        // 56.25 rounds down
        assert_eq!(s.utilization(), 56);
        assert_eq!(s.availability(), SlotAvailability::Available);
        assert_eq!(s.utilization_band(), UtilizationBand::Low);

        // 2/3 = 66.67 rounds up
        assert_eq!(slot(3, 2).utilization(), 67);
        assert_eq!(slot(10, 7).utilization_band(), UtilizationBand::Medium);
    }

    #[test]
    fn test_utilization_within_bounds() {
        for capacity in 1..=50u32 {
            for booked in 0..=capacity {
                let u = slot(capacity, booked).utilization();
                assert!(u <= 100, "capacity {capacity} booked {booked} gave {u}");
            }
        }
    }

    #[test]
    fn test_zero_capacity_reads_full() {
        let s = slot(0, 0);
        assert_eq!(s.utilization(), 100);
        assert_eq!(s.availability(), SlotAvailability::Full);
    }

    #[test]
    fn test_booking_form_completeness() {
        let mut form = BookingForm {
            devotee_name: "Rajesh Kumar".to_string(),
            phone_number: "+91 98765 43210".to_string(),
            ..Default::default()
        };
        assert!(form.is_complete());

        form.phone_number = "   ".to_string();
        assert!(!form.is_complete());

        form.phone_number = "+91 98765 43210".to_string();
        form.devotee_name = String::new();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_slot_view_serialization() {
        let view = SlotView::from(slot(100, 95));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["currentBookings"], 95);
        assert_eq!(json["availability"], "Filling Fast");
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["spotsRemaining"], 5);
        assert_eq!(json["status"], "active");
    }
}
