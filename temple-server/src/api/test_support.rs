//! Helpers for driving the assembled app in router tests

use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::Role;
use crate::core::{Config, ServerState};
use crate::services::HttpService;

pub struct TestApp {
    pub state: ServerState,
    service: HttpService,
}

impl TestApp {
    pub fn new() -> Self {
        let config = Config::with_port(0);
        let state = ServerState::initialize(&config);
        Self {
            service: HttpService::new(state.clone()),
            state,
        }
    }

    pub fn token(&self, role: Role) -> String {
        self.state
            .get_jwt_service()
            .generate_token(role.as_str(), role)
            .unwrap()
    }

    pub fn admin(&self) -> String {
        self.token(Role::Admin)
    }

    pub fn devotee(&self) -> String {
        self.token(Role::Devotee)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.service.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}

pub fn parse<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
