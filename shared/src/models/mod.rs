//! Data models
//!
//! Shared between temple-server and its clients (via API). All wire
//! names are camelCase to match the front end.

pub mod alert;
pub mod chat;
pub mod crowd;
pub mod dashboard;
pub mod donation;
pub mod parking;
pub mod prasad;
pub mod puja;
pub mod queue;
pub mod schedule;
pub mod slot;
pub mod ticket;
pub mod volunteer;

// Re-exports
pub use alert::*;
pub use chat::*;
pub use crowd::*;
pub use dashboard::*;
pub use donation::*;
pub use parking::*;
pub use prasad::*;
pub use puja::*;
pub use queue::*;
pub use schedule::*;
pub use slot::*;
pub use ticket::*;
pub use volunteer::*;
