//! HTTP error mapping.
//!
//! Every failure is answered the same way: status 500 with a fixed message.
//! The underlying cause is only logged.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message returned to clients for any failed consultation
pub const CONSULTATION_FAILED: &str = "Failed to generate consultation";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body could not be read (including bodies over the size limit)
    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error(transparent)]
    Consult(#[from] consult_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Consultation failed");
        let body = ErrorResponse {
            error: CONSULTATION_FAILED.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
