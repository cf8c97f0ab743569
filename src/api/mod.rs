//! HTTP route handlers

pub mod analyze;
pub mod health;

pub use analyze::analyze_entry;
pub use health::{health_check, read_root};
