//! Health check
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |

use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

pub fn router() -> Router<ServerState> {
    // start the uptime clock when routes are assembled
    START_TIME.get_or_init(Instant::now);
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    temple_name: String,
    environment: String,
    uptime_seconds: u64,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let uptime_seconds = START_TIME
        .get_or_init(Instant::now)
        .elapsed()
        .as_secs();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        temple_name: state.config.temple_name.clone(),
        environment: state.config.environment.clone(),
        uptime_seconds,
    })
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use crate::api::test_support::TestApp;

    #[tokio::test]
    async fn test_health_is_public() {
        let app = TestApp::new();
        let (status, body) = app.get("/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }
}
