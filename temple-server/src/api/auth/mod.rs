//! Auth API
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/auth/login | POST | none |
//! | /api/auth/me | GET | token |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/me", get(handler::me))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;
    use shared::ErrorCode;
    use shared::client::LoginResponse;

    use crate::api::test_support::{TestApp, parse};

    #[tokio::test]
    async fn test_admin_login_and_me() {
        let app = TestApp::new();
        let username = app.state.config.admin.username.clone();
        let password = app.state.config.admin.password.clone();

        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let login: LoginResponse = parse(body);
        assert_eq!(login.user.role, "admin");
        assert_eq!(login.user.permissions, vec!["all".to_string()]);

        let (status, body) = app.get("/api/auth/me", Some(&login.token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], username);
    }

    #[tokio::test]
    async fn test_devotee_login() {
        let app = TestApp::new();
        let creds = app.state.config.devotee.clone();
        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({ "username": creds.username, "password": creds.password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let login: LoginResponse = parse(body);
        assert_eq!(login.user.role, "devotee");
        assert!(login.user.permissions.contains(&"slots:book".to_string()));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let app = TestApp::new();
        let username = app.state.config.admin.username.clone();
        let (status, body) = app
            .post(
                "/api/auth/login",
                None,
                json!({ "username": username, "password": "definitely-wrong" }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], ErrorCode::InvalidCredentials.code());
    }

    #[tokio::test]
    async fn test_me_requires_token() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/auth/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], ErrorCode::NotAuthenticated.code());

        let (status, body) = app.get("/api/auth/me", Some("not-a-jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], ErrorCode::TokenInvalid.code());
    }
}
