//! Hosted-database access
//!
//! The journal store is a hosted Postgres table reached through its
//! REST interface; this module owns the client and the row types.

pub mod models;
pub mod supabase;

pub use models::{JournalEntry, NewJournalEntry};
pub use supabase::{SupabaseClient, SupabaseConfig, SupabaseError};
