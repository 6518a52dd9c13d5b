//! Dashboard API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /api/dashboard | GET | dashboard:view |

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::stats))
        .layer(middleware::from_fn(require_permission("dashboard:view")))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use shared::models::DashboardStats;

    use crate::api::test_support::{TestApp, parse};

    #[tokio::test]
    async fn test_admin_dashboard() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/dashboard", Some(&app.admin())).await;
        assert_eq!(status, StatusCode::OK);

        let stats: DashboardStats = parse(body);
        assert_eq!(stats.live_devotee_count, app.state.config.live_devotee_count);
        assert_eq!(stats.active_sos_alerts, 1);
        // seeded slots are not dated today, so every slot counts
        assert_eq!(stats.total_bookings_today, 260);
        assert!(!stats.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_devotee_has_no_dashboard() {
        let app = TestApp::new();
        let (status, _) = app.get("/api/dashboard", Some(&app.devotee())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
