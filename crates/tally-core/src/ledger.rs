//! Receipt ledger
//!
//! Owns the in-memory receipt list plus the store backing it. Persistence
//! failures are logged and swallowed so report callers never see them.

use std::path::PathBuf;

use crate::demo::demo_receipts;
use crate::models::{format_receipt_id, Receipt};
use crate::store::RecordStore;

pub struct Ledger {
    store: RecordStore,
    receipts: Vec<Receipt>,
}

impl Ledger {
    /// Open the ledger at `path`, loading stored receipts (or demo data
    /// when nothing usable is on disk)
    pub fn open(path: PathBuf) -> Self {
        let store = RecordStore::open(path);
        let receipts = store.load();
        Self { store, receipts }
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Simulate processing an uploaded receipt image: synthesize a receipt,
    /// assign identifiers, append and persist. Returns the new receipt.
    pub fn add_upload(&mut self) -> &Receipt {
        let mut receipt = demo_receipts(1, &mut rand::thread_rng())
            .pop()
            .unwrap_or_else(|| Receipt {
                id: 0,
                receipt_id: String::new(),
                date: chrono::Utc::now().date_naive(),
                store: "Unknown".to_string(),
                category: "Other".to_string(),
                items: Vec::new(),
                total: 0.0,
                processed_at: chrono::Utc::now(),
                image: None,
            });

        receipt.id = self.receipts.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        receipt.receipt_id = format_receipt_id(self.receipts.len() + 1);
        receipt.processed_at = chrono::Utc::now();

        self.receipts.push(receipt);
        self.persist();
        &self.receipts[self.receipts.len() - 1]
    }

    /// Replace the ledger contents with freshly generated demo data
    pub fn seed_demo(&mut self, count: usize) -> usize {
        self.receipts = demo_receipts(count, &mut rand::thread_rng());
        self.persist();
        self.receipts.len()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.receipts) {
            tracing::warn!("Failed to persist receipts: {}", e);
        }
    }
}
