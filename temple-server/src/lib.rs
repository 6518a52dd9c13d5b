//! Temple server - crowd, booking, queue and emergency management
//!
//! # Architecture
//!
//! - **Store** (`store`): one in-memory [`TempleStore`] mutated only through
//!   typed [`shared::TempleAction`]s under a single write lock
//! - **Auth** (`auth`): JWT issued after a fixed credential check
//! - **HTTP API** (`api`): one router per resource
//!
//! ```text
//! temple-server/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # JWT, permissions, middleware
//! ├── store/         # TempleStore and its action handlers
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # app assembly and HTTP serving
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use store::{StoreError, TempleStore};
pub use utils::{AppError, AppResult};
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing field syntax
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and start logging.
///
/// `LOG_LEVEL` picks the level (default `info`); `LOG_DIR` enables daily
/// rolling files; JSON output is used when `ENVIRONMENT=production`.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("ENVIRONMENT").is_ok_and(|e| e == "production");
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(&level, json, log_dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
  _____                      _
 |_   _|__ _ __ ___  _ __ | | ___
   | |/ _ \ '_ ` _ \| '_ \| |/ _ \
   | |  __/ | | | | | |_) | |  __/
   |_|\___|_| |_| |_| .__/|_|\___|
                    |_|
    "#
    );
}
