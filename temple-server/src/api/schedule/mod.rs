//! Temple schedule API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/schedule | GET | public |
//! | /api/schedule | POST | temple:manage |
//! | /api/schedule/{id} | PUT, DELETE | temple:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/schedule", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/", get(handler::list));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_permission("temple:manage")));

    public_routes.merge(manage_routes)
}
