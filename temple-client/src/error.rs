//! Client error types

use http::StatusCode;
use shared::error::{ApiResponse, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status; `message` is the raw body
    #[error("Server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// 2xx answer whose body is not JSON
    #[error("Expected a JSON response but got {content_type}")]
    NonJson { content_type: String, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file error (chat history)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Inline text for the user: `Failed to <context>: <reason>`
    pub fn user_message(&self, context: &str) -> String {
        let reason = match self {
            ClientError::Api { status, message } if message.trim().is_empty() => {
                status.to_string()
            }
            ClientError::Api { message, .. } => message.clone(),
            ClientError::NonJson { content_type, .. } => {
                format!("unexpected {content_type} response")
            }
            other => other.to_string(),
        };
        format!("Failed to {context}: {reason}")
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Server error code, when the body of an API error is the usual envelope
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { message, .. } => serde_json::from_str::<ApiResponse>(message)
                .ok()
                .and_then(|body| body.error_code()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
