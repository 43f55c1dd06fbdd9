//! HTTP error type
//!
//! Handlers return `Result<T, ApiError>`; every error becomes a JSON
//! `{"detail": ...}` body. Remote-service failures are logged in full but
//! reported to the caller as a generic server error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use folio::DomainError;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required credential was not supplied at startup
    #[error("{0} not configured on server.")]
    NotConfigured(&'static str),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotConfigured(_) => {
                tracing::warn!("⚠️  Rejected request: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            ApiError::Domain(e) => {
                tracing::error!(error = %e, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
