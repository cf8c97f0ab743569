//! journal-api library - journal text analysis backend
//!
//! Accepts journal text over HTTP, persists it to a hosted database,
//! and returns per-sentence emotion/sentiment labels from pre-trained
//! text-classification models.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod nlp;

use db::SupabaseClient;
use nlp::Analyzer;

/// Application state shared across HTTP handlers
///
/// Both clients are constructed once at startup and are read-only
/// afterwards; no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Hosted-database client for journal entry persistence
    pub supabase: Arc<SupabaseClient>,
    /// Sentence-level emotion/sentiment analyzer
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Create new application state
    pub fn new(supabase: SupabaseClient, analyzer: Analyzer) -> Self {
        Self {
            supabase: Arc::new(supabase),
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Build application router
///
/// Routes mirror the external interface: a fixed greeting at `/`, a
/// health endpoint for monitoring, and the analysis endpoint.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(api::read_root))
        .route("/health", get(api::health_check))
        .route("/analyze", post(api::analyze_entry))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}

/// CORS layer for the local development frontends
///
/// Credentials are allowed, so the origin list must be explicit rather
/// than permissive (tower-http rejects wildcard-with-credentials).
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
