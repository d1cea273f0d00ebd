// ABOUTME: Unified error handling with standard error codes and HTTP responses
// ABOUTME: Defines AppError, its constructor helpers, and the JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solace Labs

//! Unified error type for the Solace backend
//!
//! Every failure that can cross the HTTP boundary is an [`AppError`]. Handlers
//! return `Result<Response, AppError>` and the [`IntoResponse`] impl converts
//! the error into the uniform `{"error": {"code", "message"}}` body, so no
//! error shape is assembled ad hoc at call sites.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Convenience alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Stable machine-readable error codes exposed in HTTP error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Required configuration (e.g. the API credential) is missing
    ConfigurationError,
    /// The request payload failed validation
    InvalidInput,
    /// An upstream service call failed (network, auth, quota, malformed request)
    ExternalServiceError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status this code maps to
    ///
    /// Gateway failures surface as 500 rather than 502: the caller-facing
    /// contract treats them as a server-side service error.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::ConfigurationError | Self::ExternalServiceError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Application error carrying a stable code and a caller-facing message
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message included in the HTTP body
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing or invalid startup configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    /// Request payload failed validation
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// An upstream service call failed; `service` names the collaborator
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// JSON body returned for every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error detail
    pub error: ErrorDetail,
}

/// Inner error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        if status.is_server_error() {
            error!(code = ?self.code, "request failed: {}", self.message);
        }
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (status, Json(body)).into_response()
    }
}
