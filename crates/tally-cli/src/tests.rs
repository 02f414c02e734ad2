//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use tally_core::{format_receipt_id, Ledger, Receipt, ReceiptItem, RecordStore};

use crate::commands::{self, truncate};

/// Create an empty data file in a temp dir, returning (dir, path).
/// The dir must stay alive for the path to remain valid.
fn setup_test_store() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipts.json");
    RecordStore::open(path.clone()).save(&[]).unwrap();
    (dir, path)
}

// ========== Receipt Command Tests ==========

#[test]
fn test_cmd_seed() {
    let (_dir, path) = setup_test_store();
    assert!(commands::cmd_seed(&path, 15).is_ok());

    let ledger = Ledger::open(path);
    assert_eq!(ledger.receipts().len(), 15);
}

#[test]
fn test_cmd_add() {
    let (_dir, path) = setup_test_store();
    assert!(commands::cmd_add(&path).is_ok());
    assert!(commands::cmd_add(&path).is_ok());

    let ledger = Ledger::open(path);
    assert_eq!(ledger.receipts().len(), 2);
    assert_eq!(ledger.receipts()[1].receipt_id, "RCP_0002");
}

#[test]
fn test_cmd_list_empty() {
    let (_dir, path) = setup_test_store();
    assert!(commands::cmd_list(&path, 20).is_ok());
}

#[test]
fn test_cmd_list_with_receipts() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 10).unwrap();
    assert!(commands::cmd_list(&path, 5).is_ok());
}

#[test]
fn test_cmd_list_multibyte_store_name() {
    let (_dir, path) = setup_test_store();
    // Long non-ASCII store name forces truncation mid-text
    let receipt = Receipt {
        id: 1,
        receipt_id: format_receipt_id(1),
        date: "2024-03-15".parse().unwrap(),
        store: "Crêperie Générale Café Étoilé".to_string(),
        category: "Dining".to_string(),
        items: vec![ReceiptItem {
            name: "Crêpe".to_string(),
            price: 9.50,
        }],
        total: 9.50,
        processed_at: chrono::Utc::now(),
        image: None,
    };
    RecordStore::open(path.clone()).save(&[receipt]).unwrap();

    assert!(commands::cmd_list(&path, 20).is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_summary() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    assert!(commands::cmd_report_summary(&path, "2024-03", 1000.0).is_ok());
}

#[test]
fn test_cmd_report_summary_empty_month() {
    let (_dir, path) = setup_test_store();
    // No receipts at all: the summary still reports budget status (ok, 0%)
    assert!(commands::cmd_report_summary(&path, "2024-03", 1000.0).is_ok());
}

#[test]
fn test_cmd_report_summary_malformed_month() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    // Malformed month shows an empty summary rather than failing
    assert!(commands::cmd_report_summary(&path, "March 2024", 1000.0).is_ok());
}

#[test]
fn test_cmd_report_categories() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    assert!(commands::cmd_report_categories(&path).is_ok());
}

#[test]
fn test_cmd_report_daily() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    assert!(commands::cmd_report_daily(&path).is_ok());
}

#[test]
fn test_cmd_report_stores() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    assert!(commands::cmd_report_stores(&path, 5).is_ok());
}

#[test]
fn test_cmd_report_trend() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 20).unwrap();
    assert!(commands::cmd_report_trend(&path).is_ok());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_to_file() {
    let (dir, path) = setup_test_store();
    commands::cmd_seed(&path, 8).unwrap();

    let out = dir.path().join("receipts.csv");
    assert!(commands::cmd_export(&path, Some(&out)).is_ok());

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "receiptId,date,store,category,total,itemCount");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_cmd_export_stdout() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 3).unwrap();
    assert!(commands::cmd_export(&path, None).is_ok());
}

// ========== Status Command Tests ==========

#[test]
fn test_cmd_status() {
    let (_dir, path) = setup_test_store();
    commands::cmd_seed(&path, 5).unwrap();
    assert!(commands::cmd_status(&path).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
}

#[test]
fn test_truncate_multibyte() {
    // Cutting inside a 2-byte char must step back to the boundary
    assert_eq!(truncate("ééééééééééé", 10), "ééé...");
    assert_eq!(truncate("日本語のレシート", 10), "日本...");
    assert_eq!(truncate("éé", 10), "éé");
}

#[test]
fn test_current_month_format() {
    let month = commands::current_month();
    assert_eq!(month.len(), 7);
    assert_eq!(&month[4..5], "-");
}
