//! In-memory temple state
//!
//! [`TempleStore`] owns every piece of mutable state behind one
//! `parking_lot::RwLock`. Mutations arrive as [`TempleAction`]s and run to
//! completion under the write lock; reads take the read lock and return
//! owned snapshots.
//!
//! ```text
//! handler ──► TempleStore::execute(action)
//!                  │  write lock
//!                  ▼
//!             TempleState::apply ──► slots / queue / tickets / alerts / services
//!                  │
//!                  ▼
//!             ActionOutcome
//! ```

mod alerts;
mod error;
mod queue;
mod seed;
mod services;
mod slots;
mod tickets;

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::models::{
    AlertStatus, AlertSummary, BookingEntry, DashboardStats, Donation, DonationAnalytics,
    ETokenBooking,
    ParkingPricing, ParkingStatus, PrasadTimings, PujaBooking, QueueStatus, QueueView,
    ScannedTicket, ScheduleEntry, SlotView, SosAlert, TicketRecord, TimeSlot, Volunteer,
    ZoneDensity, ZoneDensityView,
};
use shared::types::{EntityId, Timestamp};
use shared::util::now_millis;
use shared::{ActionOutcome, TempleAction};

use crate::core::Config;

pub use error::{StoreError, StoreResult};
pub use seed::{DEFAULT_DISPLAY_MESSAGE, DEFAULT_PANDITS};

/// Everything the store guards
#[derive(Debug)]
pub(crate) struct TempleState {
    temple_name: String,
    parking_total_spaces: u32,
    /// Last timestamp handed out by [`TempleState::tick`]
    clock: Timestamp,

    slots: Vec<TimeSlot>,
    next_slot_id: EntityId,
    bookings: Vec<ETokenBooking>,
    next_token: u32,

    queue: QueueStatus,

    /// Ticket records keyed by QR payload
    tickets: HashMap<String, TicketRecord>,
    scan_history: Vec<ScannedTicket>,

    alerts: Vec<SosAlert>,

    prasad: PrasadTimings,
    parking_pricing: ParkingPricing,
    parking_occupied: u32,
    pandits: Vec<String>,
    pujas: Vec<PujaBooking>,
    schedule: Vec<ScheduleEntry>,
    next_schedule_id: EntityId,
    zones: Vec<ZoneDensity>,
    donations: Vec<Donation>,
    volunteers: Vec<Volunteer>,
}

impl TempleState {
    fn empty(config: &Config) -> Self {
        Self {
            temple_name: config.temple_name.clone(),
            parking_total_spaces: config.parking_total_spaces,
            clock: 0,
            slots: Vec::new(),
            next_slot_id: 1,
            bookings: Vec::new(),
            next_token: 1,
            queue: QueueStatus {
                current_token: 0,
                display_message: DEFAULT_DISPLAY_MESSAGE.to_string(),
                is_active: true,
                last_updated: now_millis(),
            },
            tickets: HashMap::new(),
            scan_history: Vec::new(),
            alerts: Vec::new(),
            prasad: PrasadTimings::default(),
            parking_pricing: ParkingPricing::default(),
            parking_occupied: 0,
            pandits: DEFAULT_PANDITS.iter().map(|p| p.to_string()).collect(),
            pujas: Vec::new(),
            schedule: Vec::new(),
            next_schedule_id: 1,
            zones: Vec::new(),
            donations: Vec::new(),
            volunteers: Vec::new(),
        }
    }

    /// Strictly increasing millisecond timestamp
    ///
    /// Two calls within the same millisecond still get distinct values.
    fn tick(&mut self) -> Timestamp {
        let now = now_millis().max(self.clock + 1);
        self.clock = now;
        now
    }

    fn apply(&mut self, action: TempleAction) -> StoreResult<ActionOutcome> {
        let outcome = match action {
            TempleAction::CreateSlot {
                date,
                time,
                capacity,
            } => ActionOutcome::Slot(self.create_slot(date, time, capacity)?),
            TempleAction::DeleteSlot { slot_id } => {
                ActionOutcome::SlotDeleted(self.delete_slot(slot_id)?)
            }
            TempleAction::BookSlot { slot_id, form } => {
                ActionOutcome::Booking(self.book_slot(slot_id, form)?)
            }

            TempleAction::CallNextToken => ActionOutcome::Queue(self.call_next_token()?),
            TempleAction::ToggleQueue => ActionOutcome::Queue(self.toggle_queue()),
            TempleAction::UpdateQueueMessage { message } => {
                ActionOutcome::Queue(self.update_queue_message(message)?)
            }
            TempleAction::ResetQueue => ActionOutcome::Queue(self.reset_queue()),

            TempleAction::ScanTicket { qr_payload } => {
                ActionOutcome::Scan(self.scan_ticket(&qr_payload)?)
            }
            TempleAction::CheckInTicket { booking_id } => {
                ActionOutcome::CheckIn(self.check_in(&booking_id)?)
            }

            TempleAction::TriggerSos {
                user_id,
                user_name,
                location,
            } => ActionOutcome::Alert(self.trigger_sos(user_id, user_name, location)),
            TempleAction::RespondToAlert { alert_id } => {
                ActionOutcome::Alert(self.advance_alert(&alert_id, AlertStatus::Responded)?)
            }
            TempleAction::ResolveAlert { alert_id } => {
                ActionOutcome::Alert(self.advance_alert(&alert_id, AlertStatus::Resolved)?)
            }

            TempleAction::UpdatePrasadTimings { timings } => {
                ActionOutcome::Prasad(self.update_prasad(timings)?)
            }
            TempleAction::UpdateParkingPricing { pricing } => {
                ActionOutcome::Parking(self.update_parking_pricing(pricing)?)
            }
            TempleAction::UpdateParkingOccupancy { occupied_spaces } => {
                ActionOutcome::Parking(self.update_parking_occupancy(occupied_spaces)?)
            }
            TempleAction::BookPuja { request } => ActionOutcome::Puja(self.book_puja(request)?),
            TempleAction::AssignPandit { booking_id, pandit } => {
                ActionOutcome::Puja(self.assign_pandit(&booking_id, pandit)?)
            }
            TempleAction::AddScheduleEntry { entry } => {
                ActionOutcome::Schedule(self.add_schedule_entry(entry)?)
            }
            TempleAction::UpdateScheduleEntry { id, entry } => {
                ActionOutcome::Schedule(self.update_schedule_entry(id, entry)?)
            }
            TempleAction::DeleteScheduleEntry { id } => {
                ActionOutcome::ScheduleDeleted(self.delete_schedule_entry(id)?)
            }
            TempleAction::UpdateZoneDensity { zone, density } => {
                ActionOutcome::Zone(self.update_zone_density(&zone, density)?)
            }
            TempleAction::RecordDonation { donation } => {
                ActionOutcome::Donation(self.record_donation(donation)?)
            }
            TempleAction::RegisterVolunteer { volunteer } => {
                ActionOutcome::Volunteer(self.register_volunteer(volunteer)?)
            }
        };
        Ok(outcome)
    }

    fn parking_status(&self) -> ParkingStatus {
        ParkingStatus::new(
            self.parking_total_spaces,
            self.parking_occupied,
            self.parking_pricing,
        )
    }
}

/// Shared temple state
#[derive(Debug)]
pub struct TempleStore {
    state: RwLock<TempleState>,
}

impl TempleStore {
    /// Empty store: no slots, tickets, alerts, schedule or zones
    pub fn new(config: &Config) -> Self {
        Self {
            state: RwLock::new(TempleState::empty(config)),
        }
    }

    /// Store pre-filled with the demo data
    pub fn seeded(config: &Config) -> Self {
        Self {
            state: RwLock::new(TempleState::seeded(config)),
        }
    }

    /// Execute one action under the write lock
    pub fn execute(&self, action: TempleAction) -> StoreResult<ActionOutcome> {
        let name = action.name();
        let mut state = self.state.write();
        match state.apply(action) {
            Ok(outcome) => {
                tracing::info!(action = name, "Action executed");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(action = name, error = %e, "Action rejected");
                Err(e)
            }
        }
    }

    /// Execute an action and unwrap its payload
    pub fn run<T>(&self, action: TempleAction) -> StoreResult<T>
    where
        T: TryFrom<ActionOutcome, Error = ActionOutcome>,
    {
        let name = action.name();
        self.execute(action)?.try_into().map_err(|other: ActionOutcome| {
            StoreError::Internal(format!("{name} produced unexpected outcome {other:?}"))
        })
    }

    // ========== Reads ==========

    /// Slots with derived fields, optionally restricted to one date
    pub fn list_slots(&self, date: Option<&str>) -> Vec<SlotView> {
        let state = self.state.read();
        state
            .slots
            .iter()
            .filter(|s| date.is_none_or(|d| s.date == d))
            .cloned()
            .map(SlotView::from)
            .collect()
    }

    pub fn get_slot(&self, id: EntityId) -> Option<TimeSlot> {
        self.state.read().slots.iter().find(|s| s.id == id).cloned()
    }

    /// E-token bookings, newest first, with the current status of their ticket
    pub fn bookings(&self) -> Vec<BookingEntry> {
        let state = self.state.read();
        state
            .bookings
            .iter()
            .rev()
            .filter_map(|b| {
                let ticket = state.tickets.get(&b.qr_payload)?;
                Some(BookingEntry {
                    booking: b.clone(),
                    status: ticket.status,
                })
            })
            .collect()
    }

    pub fn queue_status(&self) -> QueueStatus {
        self.state.read().queue.clone()
    }

    pub fn queue_view(&self, queue_length: u32, average_processing_time: u32) -> QueueView {
        QueueView::new(self.queue_status(), queue_length, average_processing_time)
    }

    /// Scan history, newest first
    pub fn scan_history(&self) -> Vec<ScannedTicket> {
        self.state.read().scan_history.iter().rev().cloned().collect()
    }

    pub fn ticket(&self, qr_payload: &str) -> Option<TicketRecord> {
        self.state.read().tickets.get(qr_payload).cloned()
    }

    /// Alerts newest first, with per-status counts
    pub fn alert_summary(&self) -> AlertSummary {
        let mut alerts = self.state.read().alerts.clone();
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        AlertSummary::from_alerts(alerts)
    }

    pub fn prasad_timings(&self) -> PrasadTimings {
        self.state.read().prasad.clone()
    }

    pub fn parking(&self) -> ParkingStatus {
        self.state.read().parking_status()
    }

    pub fn pandits(&self) -> Vec<String> {
        self.state.read().pandits.clone()
    }

    pub fn puja_bookings(&self) -> Vec<PujaBooking> {
        self.state.read().pujas.clone()
    }

    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        self.state.read().schedule.clone()
    }

    pub fn zones(&self) -> Vec<ZoneDensityView> {
        self.state
            .read()
            .zones
            .iter()
            .cloned()
            .map(ZoneDensityView::from)
            .collect()
    }

    pub fn donation_analytics(&self) -> DonationAnalytics {
        DonationAnalytics::from_donations(&self.state.read().donations)
    }

    pub fn volunteers(&self) -> Vec<Volunteer> {
        self.state.read().volunteers.clone()
    }

    /// Admin dashboard figures for the given day (`YYYY-MM-DD`)
    pub fn dashboard(&self, config: &Config, today: &str) -> DashboardStats {
        self.state.read().dashboard(config, today)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn config() -> Config {
        let mut config = Config::with_port(0);
        config.temple_name = "Shri Ram Mandir".to_string();
        config.parking_total_spaces = 300;
        config.queue_length = 34;
        config.average_processing_minutes = 2;
        config.live_devotee_count = 1247;
        config
    }

    pub fn seeded() -> TempleStore {
        TempleStore::seeded(&config())
    }

    pub fn empty() -> TempleStore {
        TempleStore::new(&config())
    }
}
