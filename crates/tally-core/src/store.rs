//! JSON record store
//!
//! The whole receipt list lives in a single JSON document. Reads never fail:
//! a missing or unreadable file falls back to generated demo data so the
//! reports always have something to work with.

use std::fs;
use std::path::{Path, PathBuf};

use crate::demo::demo_receipts;
use crate::error::{Error, Result};
use crate::models::Receipt;

/// Demo dataset size used when no stored data exists
pub const DEMO_RECEIPT_COUNT: usize = 40;

/// Persists receipts as one JSON document at a fixed path
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the platform data directory,
    /// e.g. ~/.local/share/tally/receipts.json on Linux
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tally")
            .join("receipts.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored receipts. Missing or corrupt files are replaced by
    /// demo data rather than surfaced as errors.
    pub fn load(&self) -> Vec<Receipt> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "No readable data at {}: {}. Using demo data.",
                    self.path.display(),
                    e
                );
                return demo_receipts(DEMO_RECEIPT_COUNT, &mut rand::thread_rng());
            }
        };

        match serde_json::from_str(&contents) {
            Ok(receipts) => receipts,
            Err(e) => {
                tracing::warn!(
                    "Could not parse {}: {}. Using demo data.",
                    self.path.display(),
                    e
                );
                demo_receipts(DEMO_RECEIPT_COUNT, &mut rand::thread_rng())
            }
        }
    }

    /// Write the full receipt list back to disk
    pub fn save(&self, receipts: &[Receipt]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(receipts)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Store(format!("Failed to write {}: {}", self.path.display(), e)))?;

        tracing::debug!("Saved {} receipts to {}", receipts.len(), self.path.display());
        Ok(())
    }
}
