//! HTTP service
//!
//! Assembles every API router with the middleware stack and serves it with
//! `axum::serve`. The same assembled router answers in-process `oneshot`
//! calls, which is how the router tests drive it.

use axum::body::Body;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue, Request, Response};
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::auth::require_auth;
use crate::core::{Result, ServerState};

pub type OneshotResult = anyhow::Result<Response<Body>>;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// uuid v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP access log
async fn log_request(request: Request<Body>, next: middleware::Next) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// Every route, no middleware and no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // public
        .merge(api::health::router())
        .merge(api::auth::router())
        // bookings and queue
        .merge(api::slots::router())
        .merge(api::queue::router())
        .merge(api::checkin::router())
        .merge(api::sos::router())
        // temple information
        .merge(api::prasad::router())
        .merge(api::parking::router())
        .merge(api::puja::router())
        .merge(api::schedule::router())
        .merge(api::crowd::router())
        .merge(api::dashboard::router())
        .merge(api::donations::router())
        .merge(api::volunteers::router())
        .merge(api::chat::router())
}

/// Fully configured application with middleware and state
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // JWT - skips public routes, injects CurrentUser
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

#[derive(Clone, Debug)]
pub struct HttpService {
    router: Router,
}

impl HttpService {
    pub fn new(state: ServerState) -> Self {
        Self {
            router: build_app(&state),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Answer one request in-process, without a socket
    pub async fn oneshot(&self, request: Request<Body>) -> OneshotResult {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    /// Serve until `shutdown` completes
    pub async fn serve<F>(&self, listener: tokio::net::TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
