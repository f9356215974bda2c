//! HTTP error handling and response types.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use crate::services::SimulationError;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Body could not be read (e.g. over the size limit)
    Rejected(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, ApiError::new(msg))
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ApiError::new(msg))
            }
            AppError::Rejected(status, msg) => {
                warn!(%status, error = %msg, "Unreadable request body");
                (status, ApiError::new(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<SimulationError> for AppError {
    fn from(err: SimulationError) -> Self {
        if err.is_validation() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = AppError::from(SimulationError::InvalidCoordinates).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let internal = AppError::from(SimulationError::Internal("boom".to_string())).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_value(ApiError::new("Invalid request data")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid request data" }));
    }
}
