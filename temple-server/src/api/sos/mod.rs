//! SOS API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/sos | POST | sos:create |
//! | /api/sos | GET | sos:manage |
//! | /api/sos/{id}/respond | POST | sos:manage |
//! | /api/sos/{id}/resolve | POST | sos:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sos", routes())
}

fn routes() -> Router<ServerState> {
    let create_routes = Router::new()
        .route("/", post(handler::trigger))
        .layer(middleware::from_fn(require_permission("sos:create")));

    let manage_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}/respond", post(handler::respond))
        .route("/{id}/resolve", post(handler::resolve))
        .layer(middleware::from_fn(require_permission("sos:manage")));

    create_routes.merge(manage_routes)
}
