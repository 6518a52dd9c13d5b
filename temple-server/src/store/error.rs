use shared::models::AlertStatus;
use shared::types::EntityId;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while executing a [`shared::TempleAction`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Time slot not found: {0}")]
    SlotNotFound(EntityId),

    #[error("Time slot is fully booked: {0}")]
    SlotFull(EntityId),

    #[error("Slot capacity must be greater than zero")]
    InvalidCapacity,

    #[error("Devotee name and phone number are required")]
    BookingIncomplete,

    #[error("Queue is paused")]
    QueuePaused,

    #[error("Display message must not be blank")]
    QueueMessageBlank,

    #[error("Invalid QR code: {0}")]
    TicketNotFound(String),

    #[error("Ticket has already been used: {0}")]
    TicketAlreadyUsed(String),

    #[error("Ticket has been cancelled: {0}")]
    TicketCancelled(String),

    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    #[error("Alert {id} cannot move from {from:?} to {to:?}")]
    InvalidAlertTransition {
        id: String,
        from: AlertStatus,
        to: AlertStatus,
    },

    #[error("Puja booking not found: {0}")]
    PujaBookingNotFound(String),

    #[error("Unknown pandit: {0}")]
    UnknownPandit(String),

    #[error("Schedule entry not found: {0}")]
    ScheduleEntryNotFound(EntityId),

    #[error("Crowd zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Occupied spaces {occupied} exceed total spaces {total}")]
    OccupancyExceedsCapacity { occupied: u32, total: u32 },

    #[error("Invalid value: {0}")]
    OutOfRange(String),

    #[error("Donation amount must be greater than zero")]
    InvalidDonationAmount,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::Required(field) => AppError::required(field),
            StoreError::SlotNotFound(id) => {
                AppError::with_message(ErrorCode::SlotNotFound, message).with_detail("slotId", id)
            }
            StoreError::SlotFull(id) => {
                AppError::with_message(ErrorCode::SlotFull, message).with_detail("slotId", id)
            }
            StoreError::InvalidCapacity => AppError::new(ErrorCode::SlotInvalidCapacity),
            StoreError::BookingIncomplete => AppError::new(ErrorCode::BookingIncomplete),
            StoreError::QueuePaused => AppError::new(ErrorCode::QueuePaused),
            StoreError::QueueMessageBlank => AppError::new(ErrorCode::QueueMessageBlank),
            StoreError::TicketNotFound(_) => AppError::new(ErrorCode::TicketNotFound),
            StoreError::TicketAlreadyUsed(id) => {
                AppError::with_message(ErrorCode::TicketAlreadyUsed, message)
                    .with_detail("bookingId", id)
            }
            StoreError::TicketCancelled(id) => {
                AppError::with_message(ErrorCode::TicketCancelled, message)
                    .with_detail("bookingId", id)
            }
            StoreError::AlertNotFound(id) => {
                AppError::with_message(ErrorCode::AlertNotFound, message).with_detail("alertId", id)
            }
            StoreError::InvalidAlertTransition { id, .. } => {
                AppError::with_message(ErrorCode::InvalidAlertTransition, message)
                    .with_detail("alertId", id)
            }
            StoreError::PujaBookingNotFound(_) => {
                AppError::with_message(ErrorCode::PujaBookingNotFound, message)
            }
            StoreError::UnknownPandit(_) => {
                AppError::with_message(ErrorCode::UnknownPandit, message)
            }
            StoreError::ScheduleEntryNotFound(_) => {
                AppError::with_message(ErrorCode::ScheduleEntryNotFound, message)
            }
            StoreError::ZoneNotFound(_) => AppError::with_message(ErrorCode::ZoneNotFound, message),
            StoreError::OccupancyExceedsCapacity { .. } => {
                AppError::with_message(ErrorCode::ParkingOccupancyInvalid, message)
            }
            StoreError::OutOfRange(_) => {
                AppError::with_message(ErrorCode::ValueOutOfRange, message)
            }
            StoreError::InvalidDonationAmount => AppError::new(ErrorCode::DonationInvalidAmount),
            StoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Store internal error");
                AppError::internal(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_codes() {
        let cases = [
            (StoreError::SlotFull(2), ErrorCode::SlotFull),
            (StoreError::QueuePaused, ErrorCode::QueuePaused),
            (
                StoreError::TicketNotFound("x".into()),
                ErrorCode::TicketNotFound,
            ),
            (
                StoreError::InvalidAlertTransition {
                    id: "SOS-1".into(),
                    from: AlertStatus::Active,
                    to: AlertStatus::Resolved,
                },
                ErrorCode::InvalidAlertTransition,
            ),
            (StoreError::Required("time"), ErrorCode::RequiredField),
        ];
        for (err, code) in cases {
            assert_eq!(AppError::from(err).code, code);
        }
    }

    #[test]
    fn test_ticket_not_found_message() {
        let err = AppError::from(StoreError::TicketNotFound("BAD".into()));
        assert_eq!(err.message, "Invalid QR code");
    }
}
