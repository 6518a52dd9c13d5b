//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 4xxx: Slot / booking errors
/// - 5xxx: Queue errors
/// - 6xxx: Ticket errors
/// - 7xxx: Alert errors
/// - 8xxx: Temple service errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Slot / booking errors (4xxx)
    Booking,
    /// Queue errors (5xxx)
    Queue,
    /// Ticket errors (6xxx)
    Ticket,
    /// Alert errors (7xxx)
    Alert,
    /// Temple service errors (8xxx)
    Service,
    /// System errors (9xxx, and the unused 3xxx block)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            4000..5000 => Self::Booking,
            5000..6000 => Self::Queue,
            6000..7000 => Self::Ticket,
            7000..8000 => Self::Alert,
            8000..9000 => Self::Service,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Booking => "booking",
            Self::Queue => "queue",
            Self::Ticket => "ticket",
            Self::Alert => "alert",
            Self::Service => "service",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
