//! Journal entry analysis endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::ApiResult;
use crate::nlp::{Analysis, MODELS_UNAVAILABLE};
use crate::AppState;

/// POST /analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /analyze
///
/// Persists the entry first, then analyzes it sentence by sentence.
/// The record and the analysis are atomic per request: a failed insert
/// aborts with 500 and the analyzer is never invoked. A successful
/// request returns either the ordered sentence results or, when the
/// models failed to load at startup, the fixed unavailability payload
/// (status 200).
pub async fn analyze_entry(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Response> {
    // Save first; user accounts are not wired up yet, so the entry is
    // stored without an owner.
    let entry = state.supabase.insert_journal_entry(&req.text).await?;

    info!(entry_id = %entry.id, chars = req.text.len(), "Analyzing journal entry");

    match state.analyzer.analyze(&req.text).await? {
        Analysis::Unavailable => {
            Ok(Json(json!({ "error": MODELS_UNAVAILABLE })).into_response())
        }
        Analysis::Sentences(results) => Ok(Json(results).into_response()),
    }
}
