//! Prasad timings API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/prasad-timings | GET | public |
//! | /api/prasad-timings | PUT | temple:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/prasad-timings", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/", get(handler::get));

    let manage_routes = Router::new()
        .route("/", put(handler::update))
        .layer(middleware::from_fn(require_permission("temple:manage")));

    public_routes.merge(manage_routes)
}
