//! HTTP-facing error type.
//!
//! Resolution itself never produces an [`AppError`]: probe and cache failures
//! degrade to serving the original URL. These errors only come from the admin
//! surface (validation, authentication, store outages).

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, ErrorInfo) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorInfo {
                code,
                message,
                details,
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.parts();
        let body = Json(ErrorBody { error });

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Connection(reason) => {
                AppError::unavailable("Store unavailable", json!({ "reason": reason }))
            }
            StoreError::Operation(reason) => {
                AppError::internal("Store operation failed", json!({ "reason": reason }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), StatusCode::BAD_REQUEST),
            (AppError::unauthorized("x", json!({})), StatusCode::UNAUTHORIZED),
            (
                AppError::unavailable("x", json!({})),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::internal("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_sets_www_authenticate() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err: AppError = StoreError::Connection("refused".into()).into();
        assert!(matches!(err, AppError::Unavailable { .. }));

        let err: AppError = StoreError::Operation("bad".into()).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
