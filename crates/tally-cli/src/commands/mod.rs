//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `export` - CSV export command
//! - `receipts` - Receipt commands (seed, add, list)
//! - `reports` - Report generation commands
//! - `status` - Data file status command

pub mod export;
pub mod receipts;
pub mod reports;
pub mod status;

// Re-export command functions for main.rs
pub use export::*;
pub use receipts::*;
pub use reports::*;
pub use status::*;

use std::path::PathBuf;

use chrono::Utc;
use tally_core::RecordStore;

/// Resolve the data file path from --data or the platform default
pub fn resolve_data_path(data: Option<PathBuf>) -> PathBuf {
    let path = data.unwrap_or_else(RecordStore::default_path);
    tracing::debug!("Using data file {}", path.display());
    path
}

/// Current month as "YYYY-MM"
pub fn current_month() -> String {
    Utc::now().date_naive().format("%Y-%m").to_string()
}

/// Truncate a string to a maximum length, adding "..." if truncated.
/// Cuts on a char boundary so multibyte text never panics.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let cut = max.saturating_sub(3);
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= cut)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..end])
}
