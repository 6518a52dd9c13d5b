//! Parking API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/parking | GET | public |
//! | /api/parking/pricing | PUT | temple:manage |
//! | /api/parking/occupancy | PUT | temple:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/parking", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/", get(handler::status));

    let manage_routes = Router::new()
        .route("/pricing", put(handler::update_pricing))
        .route("/occupancy", put(handler::update_occupancy))
        .layer(middleware::from_fn(require_permission("temple:manage")));

    public_routes.merge(manage_routes)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;
    use shared::ErrorCode;
    use shared::models::ParkingStatus;

    use crate::api::test_support::{TestApp, parse};

    #[tokio::test]
    async fn test_public_status() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/parking", None).await;
        assert_eq!(status, StatusCode::OK);
        let parking: ParkingStatus = parse(body);
        assert_eq!(
            parking.available_spaces,
            parking.total_spaces - parking.occupied_spaces
        );
        assert_eq!(parking.pricing.two_wheeler, 20.0);
    }

    #[tokio::test]
    async fn test_update_pricing_returns_full_status() {
        let app = TestApp::new();
        let admin = app.admin();
        let (status, body) = app
            .put(
                "/api/parking/pricing",
                Some(&admin),
                json!({ "twoWheeler": 25, "fourWheeler": 60 }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pricing"]["fourWheeler"], 60.0);
        assert!(body["totalSpaces"].is_u64());

        let (status, body) = app
            .put(
                "/api/parking/pricing",
                Some(&admin),
                json!({ "twoWheeler": -1, "fourWheeler": 60 }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::ValueOutOfRange.code());
    }

    #[tokio::test]
    async fn test_update_occupancy() {
        let app = TestApp::new();
        let admin = app.admin();
        let total = app.state.config.parking_total_spaces;

        let (status, body) = app
            .put(
                "/api/parking/occupancy",
                Some(&admin),
                json!({ "occupiedSpaces": 10 }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["availableSpaces"], total - 10);

        let (status, body) = app
            .put(
                "/api/parking/occupancy",
                Some(&admin),
                json!({ "occupiedSpaces": total + 1 }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], ErrorCode::ParkingOccupancyInvalid.code());
    }
}
