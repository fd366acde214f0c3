// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::events::PublishError;
use crate::store::StoreError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Invalid user ID: {0}")]
    InvalidUser(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Never surfaced from the ingestion path; the activity service logs and
    /// swallows publish failures. Exists for callers that do want to fail.
    #[error("Event publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::InvalidUser(user_id) => (
                StatusCode::BAD_REQUEST,
                "invalid_user",
                Some(format!("Invalid user ID: {}", user_id)),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
            AppError::Publish(err) => {
                tracing::error!(error = %err, "Publish error");
                (StatusCode::INTERNAL_SERVER_ERROR, "publish_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
