//! Unified error codes for the temple services
//!
//! This module defines all error codes used across temple-server, temple-client
//! and the front end. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Slot / booking errors
//! - 5xxx: Queue errors
//! - 6xxx: Ticket / check-in errors
//! - 7xxx: SOS alert errors
//! - 8xxx: Temple service errors (puja, parking, schedule, donations)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Slot / Booking ====================
    /// Time slot not found
    SlotNotFound = 4001,
    /// Time slot is fully booked
    SlotFull = 4002,
    /// Slot capacity must be positive
    SlotInvalidCapacity = 4003,
    /// Booking form incomplete (name / phone)
    BookingIncomplete = 4004,

    // ==================== 5xxx: Queue ====================
    /// Queue is paused
    QueuePaused = 5001,
    /// Display message is blank
    QueueMessageBlank = 5002,

    // ==================== 6xxx: Ticket ====================
    /// QR payload does not match any ticket
    TicketNotFound = 6001,
    /// Ticket was already used
    TicketAlreadyUsed = 6002,
    /// Ticket was cancelled
    TicketCancelled = 6003,

    // ==================== 7xxx: SOS ====================
    /// Alert not found
    AlertNotFound = 7001,
    /// Alert status cannot move that way
    InvalidAlertTransition = 7002,

    // ==================== 8xxx: Temple Services ====================
    /// Puja booking not found
    PujaBookingNotFound = 8001,
    /// Unknown puja type
    UnknownPujaType = 8002,
    /// Unknown pandit
    UnknownPandit = 8003,
    /// Schedule entry not found
    ScheduleEntryNotFound = 8101,
    /// Crowd zone not found
    ZoneNotFound = 8201,
    /// Parking occupancy out of range
    ParkingOccupancyInvalid = 8301,
    /// Donation amount invalid
    DonationInvalidAmount = 8401,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Slot / Booking
            ErrorCode::SlotNotFound => "Time slot not found",
            ErrorCode::SlotFull => "Time slot is fully booked",
            ErrorCode::SlotInvalidCapacity => "Slot capacity must be greater than zero",
            ErrorCode::BookingIncomplete => "Devotee name and phone number are required",

            // Queue
            ErrorCode::QueuePaused => "Queue is paused",
            ErrorCode::QueueMessageBlank => "Display message must not be blank",

            // Ticket
            ErrorCode::TicketNotFound => "Invalid QR code",
            ErrorCode::TicketAlreadyUsed => "Ticket has already been used",
            ErrorCode::TicketCancelled => "Ticket has been cancelled",

            // SOS
            ErrorCode::AlertNotFound => "Alert not found",
            ErrorCode::InvalidAlertTransition => "Alert cannot move to that status",

            // Temple services
            ErrorCode::PujaBookingNotFound => "Puja booking not found",
            ErrorCode::UnknownPujaType => "Unknown puja type",
            ErrorCode::UnknownPandit => "Unknown pandit",
            ErrorCode::ScheduleEntryNotFound => "Schedule entry not found",
            ErrorCode::ZoneNotFound => "Crowd zone not found",
            ErrorCode::ParkingOccupancyInvalid => "Occupied spaces exceed total spaces",
            ErrorCode::DonationInvalidAmount => "Donation amount must be greater than zero",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Slot / Booking
            4001 => Ok(ErrorCode::SlotNotFound),
            4002 => Ok(ErrorCode::SlotFull),
            4003 => Ok(ErrorCode::SlotInvalidCapacity),
            4004 => Ok(ErrorCode::BookingIncomplete),

            // Queue
            5001 => Ok(ErrorCode::QueuePaused),
            5002 => Ok(ErrorCode::QueueMessageBlank),

            // Ticket
            6001 => Ok(ErrorCode::TicketNotFound),
            6002 => Ok(ErrorCode::TicketAlreadyUsed),
            6003 => Ok(ErrorCode::TicketCancelled),

            // SOS
            7001 => Ok(ErrorCode::AlertNotFound),
            7002 => Ok(ErrorCode::InvalidAlertTransition),

            // Temple services
            8001 => Ok(ErrorCode::PujaBookingNotFound),
            8002 => Ok(ErrorCode::UnknownPujaType),
            8003 => Ok(ErrorCode::UnknownPandit),
            8101 => Ok(ErrorCode::ScheduleEntryNotFound),
            8201 => Ok(ErrorCode::ZoneNotFound),
            8301 => Ok(ErrorCode::ParkingOccupancyInvalid),
            8401 => Ok(ErrorCode::DonationInvalidAmount),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::SlotFull.code(), 4002);
        assert_eq!(ErrorCode::QueuePaused.code(), 5001);
        assert_eq!(ErrorCode::TicketAlreadyUsed.code(), 6002);
        assert_eq!(ErrorCode::InvalidAlertTransition.code(), 7002);
        assert_eq!(ErrorCode::UnknownPandit.code(), 8003);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::SlotNotFound));
        assert_eq!(ErrorCode::try_from(7002), Ok(ErrorCode::InvalidAlertTransition));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::TicketNotFound).unwrap();
        assert_eq!(json, "6001");

        let code: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(code, ErrorCode::QueuePaused);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::TicketNotFound.message(), "Invalid QR code");
        assert_eq!(ErrorCode::SlotFull.message(), "Time slot is fully booked");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
