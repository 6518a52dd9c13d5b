//! Temple Client - HTTP client for the temple server
//!
//! Thin JSON calls to the REST API plus the two pieces of client-side
//! behaviour that live outside the server: the chat session with its
//! persisted history, and SOS triggering with a bounded location lookup.

pub mod chat;
pub mod config;
pub mod error;
pub mod http;
pub mod sos;

pub use chat::{CHAT_CONTEXT_MESSAGES, CHAT_HISTORY_LIMIT, ChatHistoryStore, ChatSession};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use sos::{DEFAULT_LOCATION_WAIT, LocationError, LocationProvider, NoLocation, trigger_sos};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
