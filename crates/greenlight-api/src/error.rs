//! API error handling.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<greenlight_core::Error> for ApiError {
    fn from(err: greenlight_core::Error) -> Self {
        match err {
            greenlight_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            greenlight_core::Error::Upstream(msg) => ApiError::Internal(msg),
        }
    }
}
