//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Identifier of a time slot or schedule entry
pub type EntityId = i64;
