//! Donations API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/donations | POST | donations:create |
//! | /api/donations/analytics | GET | donations:view |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/donations", routes())
}

fn routes() -> Router<ServerState> {
    let create_routes = Router::new()
        .route("/", post(handler::donate))
        .layer(middleware::from_fn(require_permission("donations:create")));

    let view_routes = Router::new()
        .route("/analytics", get(handler::analytics))
        .layer(middleware::from_fn(require_permission("donations:view")));

    create_routes.merge(view_routes)
}
