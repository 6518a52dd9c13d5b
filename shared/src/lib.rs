//! Shared types for the temple services
//!
//! Wire models, the typed store actions, client DTOs and the unified
//! error system used by both `temple-server` and `temple-client`.

pub mod action;
pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod types;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use action::{ActionOutcome, TempleAction};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
