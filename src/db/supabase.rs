//! Supabase PostgREST client
//!
//! Inserts journal entries into the hosted `journal_entries` table via
//! the project's REST endpoint. One operation, no retry, no
//! partial-success handling: any transport or API error surfaces as a
//! `SupabaseError` and the caller aborts the request.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::models::{JournalEntry, NewJournalEntry};

const JOURNAL_TABLE: &str = "journal_entries";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Supabase client errors
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// PostgREST returned an error response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse the insert representation
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Connection settings for the hosted project
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL (e.g. `https://xyzcompany.supabase.co`)
    pub url: String,
    /// Service key, sent as both `apikey` header and bearer token
    pub key: String,
}

/// Supabase REST client for journal entry persistence
pub struct SupabaseClient {
    http_client: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseClient {
    /// Create new Supabase client
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }

    /// Insert one journal entry with no caller-supplied identity or owner
    ///
    /// `Prefer: return=representation` asks PostgREST to echo the
    /// inserted row back, which gives us the generated id for logging.
    pub async fn insert_journal_entry(&self, content: &str) -> Result<JournalEntry, SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, JOURNAL_TABLE);

        tracing::debug!(url = %url, "Inserting journal entry");

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
            .json(&NewJournalEntry { content })
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Api(status.as_u16(), error_text));
        }

        let mut rows: Vec<JournalEntry> = response
            .json()
            .await
            .map_err(|e| SupabaseError::Parse(e.to_string()))?;

        let entry = rows
            .pop()
            .ok_or_else(|| SupabaseError::Parse("empty insert representation".to_string()))?;

        tracing::info!(entry_id = %entry.id, "Journal entry saved");

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = SupabaseConfig {
            url: "https://example.supabase.co/".to_string(),
            key: "service-key".to_string(),
        };
        let client = SupabaseClient::new(&config).unwrap();
        // Trailing slash is normalized away so URL joins stay clean
        assert_eq!(client.base_url, "https://example.supabase.co");
    }
}
