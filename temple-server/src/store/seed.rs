//! Demo data the store starts with

use std::collections::HashMap;

use shared::models::{
    ALERT_MESSAGE, AlertStatus, LocationData, ParkingPricing, PrasadTimings, QueueStatus,
    ScheduleEntry, SosAlert, TicketRecord, TicketStatus, TimeSlot, default_schedule, default_zones,
};
use shared::util::{now_millis, qr_payload};

use super::TempleState;
use crate::core::Config;

pub const DEFAULT_DISPLAY_MESSAGE: &str =
    "Welcome to Smart Temple. Please maintain social distancing.";

pub const DEFAULT_PANDITS: &[&str] = &[
    "Pandit Ramesh Sharma",
    "Pandit Suresh Tiwari",
    "Pandit Mahesh Mishra",
];

const SEED_PARKING_OCCUPIED: u32 = 184;

fn slot(id: i64, time: &str, capacity: u32, current_bookings: u32) -> TimeSlot {
    TimeSlot {
        id,
        date: "2025-01-20".to_string(),
        time: time.to_string(),
        capacity,
        current_bookings,
    }
}

/// (booking id, devotee, phone, time, token, status)
type SeedTicket = (&'static str, &'static str, &'static str, &'static str, u32, TicketStatus);

const SEED_TICKETS: &[SeedTicket] = &[
    ("TMP-2025-001432", "Rajesh Kumar", "+91 98765 43210", "08:00 AM", 247, TicketStatus::Active),
    ("TMP-2025-001433", "Priya Sharma", "+91 98765 43211", "10:00 AM", 248, TicketStatus::Active),
    ("TMP-2025-001434", "Amit Singh", "+91 98765 43212", "10:00 AM", 246, TicketStatus::Cancelled),
];

fn ticket(temple_name: &str, seed: &SeedTicket) -> TicketRecord {
    let (booking_id, name, phone, time, token, status) = *seed;
    TicketRecord {
        booking_id: booking_id.to_string(),
        devotee_name: name.to_string(),
        phone_number: phone.to_string(),
        temple_name: temple_name.to_string(),
        date: "January 20, 2025".to_string(),
        time: time.to_string(),
        status,
        token_number: Some(token),
    }
}

fn alert(
    id: &str,
    user_id: &str,
    name: &str,
    location: (f64, f64, f64),
    status: AlertStatus,
) -> SosAlert {
    let timestamp: i64 = id.trim_start_matches("SOS-").parse().unwrap_or_default();
    let (latitude, longitude, accuracy) = location;
    SosAlert {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: name.to_string(),
        location: Some(LocationData {
            latitude,
            longitude,
            accuracy,
            timestamp,
        }),
        status,
        timestamp,
        message: ALERT_MESSAGE.to_string(),
        responded_at: (status != AlertStatus::Active).then_some(timestamp + 60_000),
    }
}

impl TempleState {
    /// State with the demo slots, tickets, alerts and temple information
    pub(crate) fn seeded(config: &Config) -> Self {
        let mut state = Self::empty(config);
        let now = now_millis();

        state.slots = vec![
            slot(1, "06:00", 100, 95),
            slot(2, "08:00", 120, 120),
            slot(3, "10:00", 80, 45),
        ];
        state.next_slot_id = 4;

        state.queue = QueueStatus {
            current_token: 247,
            display_message: DEFAULT_DISPLAY_MESSAGE.to_string(),
            is_active: true,
            last_updated: now,
        };

        state.tickets = SEED_TICKETS
            .iter()
            .map(|seed| ticket(&config.temple_name, seed))
            .map(|t| (qr_payload(&t.booking_id), t))
            .collect::<HashMap<_, _>>();
        state.next_token = 249;

        state.alerts = vec![
            alert(
                "SOS-1734567890123",
                "user123",
                "Rajesh Kumar",
                (26.7961, 82.1961, 5.0),
                AlertStatus::Active,
            ),
            alert(
                "SOS-1734567890124",
                "user456",
                "Priya Sharma",
                (26.7965, 82.1965, 8.0),
                AlertStatus::Responded,
            ),
        ];

        state.prasad = PrasadTimings::default();
        state.parking_pricing = ParkingPricing::default();
        state.parking_occupied = SEED_PARKING_OCCUPIED.min(config.parking_total_spaces);
        state.pandits = DEFAULT_PANDITS.iter().map(|p| p.to_string()).collect();

        state.schedule = default_schedule()
            .into_iter()
            .enumerate()
            .map(|(i, e)| ScheduleEntry {
                id: i as i64 + 1,
                time: e.time,
                event: e.event,
            })
            .collect();
        state.next_schedule_id = state.schedule.len() as i64 + 1;

        state.zones = default_zones();
        state
    }
}
