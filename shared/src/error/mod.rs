//! Unified error system for the temple services
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON body of a failed request
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Slot / booking errors
//! - 5xxx: Queue errors
//! - 6xxx: Ticket / check-in errors
//! - 7xxx: SOS alert errors
//! - 8xxx: Temple service errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! assert_eq!(AppError::new(ErrorCode::SlotFull).message, "Time slot is fully booked");
//!
//! let err = AppError::validation("Devotee name is required")
//!     .with_detail("field", "devoteeName");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2);
//! assert_eq!(response.error_code(), Some(ErrorCode::ValidationFailed));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
