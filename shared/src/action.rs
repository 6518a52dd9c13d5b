//! Typed store actions
//!
//! Every mutation of the temple state is expressed as one [`TempleAction`]
//! and executed to completion by the server store. The action carries all
//! the input it needs; the store answers with an [`ActionOutcome`].

use serde::{Deserialize, Serialize};

use crate::models::{
    BookingForm, Donation, DonationCreate, ETokenBooking, LocationData, ParkingPricing,
    ParkingStatus, PrasadTimings, PujaBooking, PujaBookingCreate, QueueStatus, ScannedTicket,
    ScheduleEntry, ScheduleEntryInput, SosAlert, TicketRecord, TimeSlot, Volunteer,
    VolunteerCreate, ZoneDensity,
};
use crate::types::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TempleAction {
    // ========== Slots ==========
    CreateSlot {
        date: String,
        time: String,
        capacity: u32,
    },
    DeleteSlot {
        slot_id: EntityId,
    },
    BookSlot {
        slot_id: EntityId,
        form: BookingForm,
    },

    // ========== Queue ==========
    CallNextToken,
    ToggleQueue,
    UpdateQueueMessage {
        message: String,
    },
    ResetQueue,

    // ========== Check-in ==========
    ScanTicket {
        qr_payload: String,
    },
    CheckInTicket {
        booking_id: String,
    },

    // ========== SOS ==========
    TriggerSos {
        user_id: String,
        user_name: String,
        location: Option<LocationData>,
    },
    RespondToAlert {
        alert_id: String,
    },
    ResolveAlert {
        alert_id: String,
    },

    // ========== Temple services ==========
    UpdatePrasadTimings {
        timings: PrasadTimings,
    },
    UpdateParkingPricing {
        pricing: ParkingPricing,
    },
    UpdateParkingOccupancy {
        occupied_spaces: u32,
    },
    BookPuja {
        request: PujaBookingCreate,
    },
    AssignPandit {
        booking_id: String,
        pandit: String,
    },
    AddScheduleEntry {
        entry: ScheduleEntryInput,
    },
    UpdateScheduleEntry {
        id: EntityId,
        entry: ScheduleEntryInput,
    },
    DeleteScheduleEntry {
        id: EntityId,
    },
    UpdateZoneDensity {
        zone: String,
        density: f64,
    },
    RecordDonation {
        donation: DonationCreate,
    },
    RegisterVolunteer {
        volunteer: VolunteerCreate,
    },
}

impl TempleAction {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TempleAction::CreateSlot { .. } => "create_slot",
            TempleAction::DeleteSlot { .. } => "delete_slot",
            TempleAction::BookSlot { .. } => "book_slot",
            TempleAction::CallNextToken => "call_next_token",
            TempleAction::ToggleQueue => "toggle_queue",
            TempleAction::UpdateQueueMessage { .. } => "update_queue_message",
            TempleAction::ResetQueue => "reset_queue",
            TempleAction::ScanTicket { .. } => "scan_ticket",
            TempleAction::CheckInTicket { .. } => "check_in_ticket",
            TempleAction::TriggerSos { .. } => "trigger_sos",
            TempleAction::RespondToAlert { .. } => "respond_to_alert",
            TempleAction::ResolveAlert { .. } => "resolve_alert",
            TempleAction::UpdatePrasadTimings { .. } => "update_prasad_timings",
            TempleAction::UpdateParkingPricing { .. } => "update_parking_pricing",
            TempleAction::UpdateParkingOccupancy { .. } => "update_parking_occupancy",
            TempleAction::BookPuja { .. } => "book_puja",
            TempleAction::AssignPandit { .. } => "assign_pandit",
            TempleAction::AddScheduleEntry { .. } => "add_schedule_entry",
            TempleAction::UpdateScheduleEntry { .. } => "update_schedule_entry",
            TempleAction::DeleteScheduleEntry { .. } => "delete_schedule_entry",
            TempleAction::UpdateZoneDensity { .. } => "update_zone_density",
            TempleAction::RecordDonation { .. } => "record_donation",
            TempleAction::RegisterVolunteer { .. } => "register_volunteer",
        }
    }
}

/// Result of a successfully executed [`TempleAction`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOutcome {
    Slot(TimeSlot),
    SlotDeleted(EntityId),
    Booking(ETokenBooking),
    Queue(QueueStatus),
    Scan(ScannedTicket),
    CheckIn(TicketRecord),
    Alert(SosAlert),
    Prasad(PrasadTimings),
    Parking(ParkingStatus),
    Puja(PujaBooking),
    Schedule(ScheduleEntry),
    ScheduleDeleted(EntityId),
    Zone(ZoneDensity),
    Donation(Donation),
    Volunteer(Volunteer),
}

/// `TryFrom<ActionOutcome>` for each payload type, handing back the
/// outcome unchanged when the variant does not match.
macro_rules! outcome_payload {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl TryFrom<ActionOutcome> for $ty {
                type Error = ActionOutcome;

                fn try_from(outcome: ActionOutcome) -> Result<Self, Self::Error> {
                    match outcome {
                        ActionOutcome::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

outcome_payload! {
    Slot => TimeSlot,
    Booking => ETokenBooking,
    Queue => QueueStatus,
    Scan => ScannedTicket,
    CheckIn => TicketRecord,
    Alert => SosAlert,
    Prasad => PrasadTimings,
    Parking => ParkingStatus,
    Puja => PujaBooking,
    Schedule => ScheduleEntry,
    Zone => ZoneDensity,
    Donation => Donation,
    Volunteer => Volunteer,
}
