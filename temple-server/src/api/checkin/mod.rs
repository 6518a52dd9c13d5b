//! Check-in API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/checkin/scan | POST | checkin:manage |
//! | /api/checkin/history | GET | checkin:manage |
//! | /api/checkin/{booking_id} | POST | checkin:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/checkin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/scan", post(handler::scan))
        .route("/history", get(handler::history))
        .route("/{booking_id}", post(handler::check_in))
        .layer(middleware::from_fn(require_permission("checkin:manage")))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;
    use shared::ErrorCode;
    use shared::models::ScannedTicket;

    use crate::api::test_support::{TestApp, parse};

    const QR: &str = "TMP-2025-001432-VERIFIED";

    #[tokio::test]
    async fn test_scan_twice_then_check_in() {
        let app = TestApp::new();
        let admin = app.admin();

        let (status, first) = app
            .post("/api/checkin/scan", Some(&admin), json!({ "qrPayload": QR }))
            .await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = app
            .post("/api/checkin/scan", Some(&admin), json!({ "qrPayload": QR }))
            .await;

        let first: ScannedTicket = parse(first);
        let second: ScannedTicket = parse(second);
        assert_eq!(first.ticket.booking_id, second.ticket.booking_id);
        assert!(second.scanned_at > first.scanned_at);

        let (_, history) = app.get("/api/checkin/history", Some(&admin)).await;
        assert_eq!(history.as_array().unwrap().len(), 2);

        let (status, body) = app
            .post("/api/checkin/TMP-2025-001432", Some(&admin), json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "used");

        let (status, body) = app
            .post("/api/checkin/TMP-2025-001432", Some(&admin), json!({}))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], ErrorCode::TicketAlreadyUsed.code());
    }

    #[tokio::test]
    async fn test_invalid_qr() {
        let app = TestApp::new();
        let admin = app.admin();
        let (status, body) = app
            .post(
                "/api/checkin/scan",
                Some(&admin),
                json!({ "qrPayload": "hello world" }),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Invalid QR code");
    }

    #[tokio::test]
    async fn test_devotee_cannot_scan() {
        let app = TestApp::new();
        let devotee = app.devotee();
        let (status, _) = app
            .post("/api/checkin/scan", Some(&devotee), json!({ "qrPayload": QR }))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
