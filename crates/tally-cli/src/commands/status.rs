//! Data file status command

use std::path::Path;

use anyhow::Result;
use tally_core::{total_spending, Ledger};

pub fn cmd_status(data_path: &Path) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let receipts = ledger.receipts();

    println!();
    println!("ℹ️  Tally Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Data file: {}", data_path.display());
    println!(
        "   On disk:   {}",
        if data_path.exists() { "yes" } else { "no (demo data in use)" }
    );
    println!("   Receipts:  {}", receipts.len());
    println!("   Total:     ${:.2}", total_spending(receipts));

    let mut dates: Vec<_> = receipts.iter().map(|r| r.date).collect();
    dates.sort();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!("   Span:      {} to {}", first, last);
    }
    Ok(())
}
