//! Slot API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/slots?date= | GET | slots:read |
//! | /api/slots | POST | slots:manage |
//! | /api/slots/bookings | GET | slots:manage |
//! | /api/slots/{id} | DELETE | slots:manage |
//! | /api/slots/{id}/book | POST | slots:book |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/slots", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_permission("slots:read")));

    let book_routes = Router::new()
        .route("/{id}/book", post(handler::book))
        .layer(middleware::from_fn(require_permission("slots:book")));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/bookings", get(handler::bookings))
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_permission("slots:manage")));

    read_routes.merge(book_routes).merge(manage_routes)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;
    use shared::ErrorCode;
    use shared::models::{BookingEntry, ETokenBooking, SlotView, TicketStatus};

    use crate::api::test_support::{TestApp, parse};

    #[tokio::test]
    async fn test_list_slots_with_derived_fields() {
        let app = TestApp::new();
        let token = app.devotee();
        let (status, body) = app.get("/api/slots?date=2025-01-20", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);

        let slots: Vec<SlotView> = parse(body.clone());
        assert_eq!(slots.len(), 3);
        assert_eq!(body[0]["utilization"], 95);
        assert_eq!(body[0]["availability"], "Filling Fast");
        assert_eq!(body[1]["availability"], "Full");
        assert_eq!(body[1]["isAvailable"], false);
        assert_eq!(body[2]["currentBookings"], 45);
    }

    #[tokio::test]
    async fn test_devotee_books_slot() {
        let app = TestApp::new();
        let token = app.devotee();
        let (status, body) = app
            .post(
                "/api/slots/3/book",
                Some(&token),
                json!({
                    "devoteeName": "Anita Verma",
                    "phoneNumber": "+91 90000 00000",
                    "isSeniorCitizen": true,
                    "needsWheelchair": false
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let booking: ETokenBooking = parse(body);
        assert!(booking.is_senior_citizen);

        // the new e-token scans at the gate
        let admin = app.admin();
        let (status, body) = app
            .post(
                "/api/checkin/scan",
                Some(&admin),
                json!({ "qrPayload": booking.qr_payload }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bookingId"], booking.booking_id);
    }

    #[tokio::test]
    async fn test_booking_rejections() {
        let app = TestApp::new();
        let token = app.devotee();

        let (status, body) = app
            .post(
                "/api/slots/3/book",
                Some(&token),
                json!({ "devoteeName": "  ", "phoneNumber": "+91 1" }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::BookingIncomplete.code());

        let (status, body) = app
            .post(
                "/api/slots/2/book",
                Some(&token),
                json!({ "devoteeName": "Anita", "phoneNumber": "+91 1" }),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], ErrorCode::SlotFull.code());

        let (status, _) = app
            .post(
                "/api/slots/42/book",
                Some(&token),
                json!({ "devoteeName": "Anita", "phoneNumber": "+91 1" }),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_slot_management_is_admin_only() {
        let app = TestApp::new();
        let devotee = app.devotee();
        let admin = app.admin();
        let new_slot = json!({ "date": "2025-01-21", "time": "06:00", "capacity": 60 });

        let (status, _) = app.post("/api/slots", Some(&devotee), new_slot.clone()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app.post("/api/slots", Some(&admin), new_slot).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_i64().unwrap();

        let (status, _) = app
            .post(
                "/api/slots",
                Some(&admin),
                json!({ "date": "2025-01-21", "time": "07:00", "capacity": 0 }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = app.delete(&format!("/api/slots/{id}"), Some(&admin)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(true));
    }

    #[tokio::test]
    async fn test_admin_lists_bookings() {
        let app = TestApp::new();
        let devotee = app.devotee();
        let admin = app.admin();
        for name in ["Anita Verma", "Vikram Rao"] {
            let (status, _) = app
                .post(
                    "/api/slots/3/book",
                    Some(&devotee),
                    json!({ "devoteeName": name, "phoneNumber": "+91 90000 00000" }),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, _) = app.get("/api/slots/bookings", Some(&devotee)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app.get("/api/slots/bookings", Some(&admin)).await;
        assert_eq!(status, StatusCode::OK);
        let entries: Vec<BookingEntry> = parse(body.clone());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].booking.devotee_name, "Vikram Rao");
        assert_eq!(entries[1].status, TicketStatus::Active);
        assert_eq!(body[0]["status"], "active");
        assert_eq!(body[0]["time"], "10:00");

        // checking in shows up in the list
        let booking_id = entries[1].booking.booking_id.clone();
        let (status, _) = app
            .post(&format!("/api/checkin/{booking_id}"), Some(&admin), json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = app.get("/api/slots/bookings", Some(&admin)).await;
        assert_eq!(body[1]["status"], "used");
    }

    #[tokio::test]
    async fn test_slots_require_token() {
        let app = TestApp::new();
        let (status, _) = app.get("/api/slots", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
