//! Slot creation, deletion and e-token booking

use shared::models::{BookingForm, ETokenBooking, TicketRecord, TicketStatus, TimeSlot};
use shared::types::EntityId;
use shared::util::{booking_id, qr_payload};

use super::{StoreError, StoreResult, TempleState};

/// Attempts at drawing a booking id that is not yet taken
const BOOKING_ID_ATTEMPTS: usize = 16;

impl TempleState {
    pub(super) fn create_slot(
        &mut self,
        date: String,
        time: String,
        capacity: u32,
    ) -> StoreResult<TimeSlot> {
        if date.trim().is_empty() {
            return Err(StoreError::Required("date"));
        }
        if time.trim().is_empty() {
            return Err(StoreError::Required("time"));
        }
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity);
        }

        let slot = TimeSlot {
            id: self.next_slot_id,
            date: date.trim().to_string(),
            time: time.trim().to_string(),
            capacity,
            current_bookings: 0,
        };
        self.next_slot_id += 1;
        self.slots.push(slot.clone());
        Ok(slot)
    }

    pub(super) fn delete_slot(&mut self, slot_id: EntityId) -> StoreResult<EntityId> {
        let index = self
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or(StoreError::SlotNotFound(slot_id))?;
        self.slots.remove(index);
        Ok(slot_id)
    }

    fn unused_booking_id(&self) -> StoreResult<String> {
        for _ in 0..BOOKING_ID_ATTEMPTS {
            let id = booking_id();
            if !self.tickets.contains_key(&qr_payload(&id)) {
                return Ok(id);
            }
        }
        Err(StoreError::Internal(
            "could not allocate a unique booking id".to_string(),
        ))
    }

    pub(super) fn book_slot(
        &mut self,
        slot_id: EntityId,
        form: BookingForm,
    ) -> StoreResult<ETokenBooking> {
        if !form.is_complete() {
            return Err(StoreError::BookingIncomplete);
        }

        let slot = self
            .slots
            .iter()
            .find(|s| s.id == slot_id)
            .ok_or(StoreError::SlotNotFound(slot_id))?;
        if !slot.is_available() {
            return Err(StoreError::SlotFull(slot_id));
        }
        let (date, time) = (slot.date.clone(), slot.time.clone());

        let booking_id = self.unused_booking_id()?;
        let created_at = self.tick();
        let token_number = self.next_token;

        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
            slot.current_bookings += 1;
        }
        self.next_token += 1;

        let booking = ETokenBooking {
            qr_payload: qr_payload(&booking_id),
            booking_id,
            slot_id,
            date,
            time,
            devotee_name: form.devotee_name.trim().to_string(),
            phone_number: form.phone_number.trim().to_string(),
            is_senior_citizen: form.is_senior_citizen,
            needs_wheelchair: form.needs_wheelchair,
            token_number,
            created_at,
        };

        self.tickets.insert(
            booking.qr_payload.clone(),
            TicketRecord {
                booking_id: booking.booking_id.clone(),
                devotee_name: booking.devotee_name.clone(),
                phone_number: booking.phone_number.clone(),
                temple_name: self.temple_name.clone(),
                date: booking.date.clone(),
                time: booking.time.clone(),
                status: TicketStatus::Active,
                token_number: Some(token_number),
            },
        );
        self.bookings.push(booking.clone());
        Ok(booking)
    }
}
