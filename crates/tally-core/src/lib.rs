//! Tally Core Library
//!
//! Shared functionality for the Tally expense aggregator:
//! - Receipt data model and cent-accurate money arithmetic
//! - Spending reports (monthly filtering, category and store breakdowns,
//!   daily and monthly trends, budget alerts)
//! - JSON record store with demo-data fallback
//! - Receipt ledger with simulated upload processing
//! - CSV export

pub mod demo;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod money;
pub mod reports;
pub mod store;

pub use demo::demo_receipts;
pub use error::{Error, Result};
pub use export::receipts_csv;
pub use ledger::Ledger;
pub use models::{
    format_receipt_id, BudgetAlert, CategoryTotal, DailyTotal, MonthTotal, Receipt, ReceiptItem,
    Severity, StoreTotal,
};
pub use money::{percent, round2, sum_rounded};
pub use reports::{
    budget_alerts, category_breakdown, daily_spending, filter_by_month, monthly_trend,
    top_stores, total_spending, DEFAULT_TOP_STORES,
};
pub use store::{RecordStore, DEMO_RECEIPT_COUNT};
