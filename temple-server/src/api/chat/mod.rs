//! Temple assistant chat
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/chat | POST | chat:use |

mod assistant;
mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/chat", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::chat))
        .layer(middleware::from_fn(require_permission("chat:use")))
}
