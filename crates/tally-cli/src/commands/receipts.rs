//! Receipt commands (seed, add, list)

use std::path::Path;

use anyhow::Result;
use tally_core::Ledger;

use super::truncate;

pub fn cmd_seed(data_path: &Path, count: usize) -> Result<()> {
    let mut ledger = Ledger::open(data_path.to_path_buf());
    let seeded = ledger.seed_demo(count);

    println!("🌱 Seeded {} demo receipts", seeded);
    println!("   Data file: {}", data_path.display());
    Ok(())
}

pub fn cmd_add(data_path: &Path) -> Result<()> {
    let mut ledger = Ledger::open(data_path.to_path_buf());
    let receipt = ledger.add_upload();

    println!("🧾 Processed receipt {}", receipt.receipt_id);
    println!("   Store:    {}", receipt.store);
    println!("   Category: {}", receipt.category);
    println!("   Date:     {}", receipt.date);
    println!("   Items:    {}", receipt.items.len());
    println!("   Total:    ${:.2}", receipt.total);
    Ok(())
}

pub fn cmd_list(data_path: &Path, limit: usize) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let receipts = ledger.receipts();

    println!();
    println!("🧾 Receipts ({} total)", receipts.len());
    println!("   ─────────────────────────────────────────────────────────────");

    if receipts.is_empty() {
        println!("   No receipts yet. Run 'tally seed' or 'tally add'.");
        return Ok(());
    }

    println!(
        "   {:8} │ {:10} │ {:22} │ {:12} │ {:>9}",
        "ID", "Date", "Store", "Category", "Total"
    );
    println!("   ─────────────────────────────────────────────────────────────");

    // Newest first
    let mut sorted: Vec<_> = receipts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    for receipt in sorted.iter().take(limit) {
        println!(
            "   {:8} │ {:10} │ {:22} │ {:12} │ {:>8.2}",
            receipt.receipt_id,
            receipt.date.to_string(),
            truncate(&receipt.store, 22),
            truncate(&receipt.category, 12),
            receipt.total
        );
    }

    if receipts.len() > limit {
        println!("   ... and {} more", receipts.len() - limit);
    }
    Ok(())
}
