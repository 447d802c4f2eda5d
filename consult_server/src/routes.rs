//! Consultation endpoint.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::Json;
use serde::Serialize;

/// Path of the single consultation endpoint
pub const CONSULT_PATH: &str = "/api/consult";

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// `POST /api/consult`
///
/// The body is taken as raw bytes so that malformed JSON and oversized
/// bodies fail with the same 500 response as any other error.
pub async fn consult(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let body = body?;
    tracing::debug!(bytes = body.len(), "Received consultation request");

    let report = consult_core::consult_json(&body)?;

    tracing::info!("Consultation generated");
    Ok(Json(AdviceResponse {
        advice: report.into_string(),
    }))
}
