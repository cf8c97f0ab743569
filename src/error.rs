//! Error types for journal-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::SupabaseError;
use crate::nlp::InferenceError;

/// API error type
///
/// Every failure is terminal for the request it occurs in: no retries,
/// no partial results. Model unavailability is NOT an error here - the
/// analyzer reports it as a structured payload with status 200.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Journal entry insert failed (500, fixed detail message)
    #[error("Failed to save journal entry: {0}")]
    Persistence(#[from] SupabaseError),

    /// Inference call failed mid-request (500, fixed detail message)
    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::Persistence(e) => {
                tracing::error!("Database error: {}", e);
                "Failed to save journal entry."
            }
            ApiError::Inference(e) => {
                tracing::error!("Inference error: {}", e);
                "Failed to analyze journal entry."
            }
        };

        let body = Json(json!({ "detail": detail }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
