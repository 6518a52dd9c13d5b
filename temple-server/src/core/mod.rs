//! Core module - configuration, state, server and errors
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared server state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - server startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, Credential};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
