//! Row types for the `journal_entries` table
//!
//! The table is created out-of-band in the hosted project:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS journal_entries (
//!   id UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
//!   user_id UUID REFERENCES auth.users(id),
//!   content TEXT,
//!   created_at TIMESTAMP WITH TIME ZONE DEFAULT timezone('utc'::text, now()) NOT NULL
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert payload for a journal entry
///
/// `id`, `user_id` and `created_at` are supplied by the database;
/// user accounts are not wired up yet, so `user_id` stays null.
#[derive(Debug, Serialize)]
pub struct NewJournalEntry<'a> {
    pub content: &'a str,
}

/// A persisted journal entry, as returned by the insert representation
///
/// Owned entirely by the hosted database; this service never reads it
/// back after the insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_entry_parses_hosted_representation() {
        let json = r#"{
            "id": "4f5e8c1a-0b8d-4e2a-9c1f-7d3b2a1e0f9c",
            "user_id": null,
            "content": "Dear diary.",
            "created_at": "2025-06-01T12:34:56+00:00"
        }"#;

        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.user_id.is_none());
        assert_eq!(entry.content, "Dear diary.");
        assert_eq!(entry.created_at.to_rfc3339(), "2025-06-01T12:34:56+00:00");
    }

    #[test]
    fn new_entry_serializes_content_only() {
        let payload = NewJournalEntry { content: "hello" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "content": "hello" }));
    }
}
