//! Queue API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/queue | GET | queue:read |
//! | /api/queue/next | POST | queue:manage |
//! | /api/queue/toggle | POST | queue:manage |
//! | /api/queue/message | POST | queue:manage |
//! | /api/queue/reset | POST | queue:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/queue", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::status))
        .layer(middleware::from_fn(require_permission("queue:read")));

    let manage_routes = Router::new()
        .route("/next", post(handler::call_next))
        .route("/toggle", post(handler::toggle))
        .route("/message", post(handler::update_message))
        .route("/reset", post(handler::reset))
        .layer(middleware::from_fn(require_permission("queue:manage")));

    read_routes.merge(manage_routes)
}
