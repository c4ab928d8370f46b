//! Thin client for the hosted backend: auth endpoints plus the tabular REST
//! surface. Every call is a single attempt; failures are reported to the
//! user and recovered only by re-triggering the action.

pub mod auth;
pub mod db;

use gloo_net::http::Response;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("You are not signed in.")]
    Unauthenticated,
}

impl ApiError {
    pub(crate) fn network(error: gloo_net::Error) -> Self {
        ApiError::Network(error.to_string())
    }

    pub(crate) fn decode(error: gloo_net::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

/// Pull a human-readable message out of an auth or REST error body. The two
/// services disagree on the key, so try each known one before falling back
/// to the raw text.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error_description", "msg", "message"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}

pub(crate) async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Service {
        status,
        message: error_message(status, &body),
    }
}
