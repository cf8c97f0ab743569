//! journal-api - journal text analysis backend
//!
//! Accepts journal submissions over HTTP, persists them to the hosted
//! `journal_entries` table, and returns per-sentence emotion/sentiment
//! labels from two pre-trained text-classification models.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use journal_api::config::Config;
use journal_api::db::SupabaseClient;
use journal_api::nlp::Analyzer;
use journal_api::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "journal-api", about = "Journal text analysis backend")]
struct Args {
    /// Path to TOML config file (default: ~/.config/journal-api/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port (overrides JOURNAL_API_PORT and the config file)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification immediately after tracing init, before any
    // network delays.
    info!(
        "Starting journal-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = Config::resolve(args.config.as_deref(), args.port)?;

    // The service is useless without its store, so a missing client
    // configuration aborts startup. Model warmup failure does not: the
    // analyzer stays up and reports unavailability per request.
    let supabase = SupabaseClient::new(&config.supabase)?;
    info!("✓ Supabase client ready");

    let analyzer = Analyzer::initialize(&config.nlp).await;
    if analyzer.is_available() {
        info!("✓ NLP models warmed up");
    } else {
        warn!("NLP models unavailable; /analyze will return the error payload");
    }

    let state = AppState::new(supabase, analyzer);
    let app = build_router(state, &config.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("journal-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
