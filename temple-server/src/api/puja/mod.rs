//! Virtual puja API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/virtual-puja/pandits | GET | public |
//! | /api/virtual-puja | POST | puja:book |
//! | /api/virtual-puja | GET | puja:manage |
//! | /api/virtual-puja/{id}/assign | PUT | puja:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/virtual-puja", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/pandits", get(handler::pandits));

    let book_routes = Router::new()
        .route("/", post(handler::book))
        .layer(middleware::from_fn(require_permission("puja:book")));

    let manage_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}/assign", put(handler::assign))
        .layer(middleware::from_fn(require_permission("puja:manage")));

    public_routes.merge(book_routes).merge(manage_routes)
}
