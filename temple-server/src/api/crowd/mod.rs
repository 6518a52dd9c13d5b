//! Crowd density API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/crowd | GET | temple:read |
//! | /api/crowd/{zone} | PUT | temple:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/crowd", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_permission("temple:read")));

    let manage_routes = Router::new()
        .route("/{zone}", put(handler::update))
        .layer(middleware::from_fn(require_permission("temple:manage")));

    read_routes.merge(manage_routes)
}
