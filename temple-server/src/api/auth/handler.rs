//! Authentication Handlers

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::{CurrentUser, Role};
use crate::core::{Credential, ServerState};
use crate::security_log;
use shared::client::{LoginRequest, LoginResponse, UserInfo};

fn matches(credential: &Credential, req: &LoginRequest) -> bool {
    credential.username == req.username && credential.password == req.password
}

/// POST /api/auth/login - check the fixed credentials and issue a token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let role = if matches(&state.config.admin, &req) {
        Role::Admin
    } else if matches(&state.config.devotee, &req) {
        Role::Devotee
    } else {
        security_log!("WARN", "login_failed", username = req.username.clone());
        return Err(AppError::invalid_credentials());
    };

    let token = state
        .get_jwt_service()
        .generate_token(&req.username, role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(username = %req.username, role = role.as_str(), "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: req.username.clone(),
            username: req.username,
            role: role.as_str().to_string(),
            permissions: role.permissions(),
        },
    }))
}

/// GET /api/auth/me - current user from the token
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.username.clone(),
        username: user.username,
        role: user.role.as_str().to_string(),
        permissions: user.permissions,
    })
}
