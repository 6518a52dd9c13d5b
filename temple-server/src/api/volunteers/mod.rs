//! Volunteers API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/volunteers | POST | volunteers:register |
//! | /api/volunteers | GET | volunteers:view |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/volunteers", routes())
}

fn routes() -> Router<ServerState> {
    let register_routes = Router::new()
        .route("/", post(handler::register))
        .layer(middleware::from_fn(require_permission("volunteers:register")));

    let view_routes = Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_permission("volunteers:view")));

    register_routes.merge(view_routes)
}
