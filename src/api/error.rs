//! Error type for the HTTP adapter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::collection::CollectionError;

/// Errors surfaced at the HTTP boundary.
///
/// Detail stays in logs; clients only ever see the generic body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query string could not be decoded at all.
    #[error("query string rejected: {0}")]
    Extract(String),
    /// The query source failed.
    #[error(transparent)]
    Collection(#[from] CollectionError),
    /// The query task panicked or was cancelled.
    #[error("query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
