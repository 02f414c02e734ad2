//! Report command implementations

use std::path::Path;

use anyhow::Result;
use tally_core::{
    budget_alerts, category_breakdown, daily_spending, filter_by_month, monthly_trend,
    percent, top_stores, total_spending, Ledger, Severity,
};

use super::truncate;

pub fn cmd_report_summary(data_path: &Path, month: &str, budget: f64) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let receipts = filter_by_month(ledger.receipts(), month);
    let total = total_spending(&receipts);

    println!();
    println!("📊 Monthly Summary");
    println!("   Month: {}", month);
    println!("   ─────────────────────────────────────────────────────────────");

    if receipts.is_empty() {
        println!("   No receipts found for this month.");
    } else {
        println!("   Receipts: {}", receipts.len());
        println!("   Total:    ${:.2}", total);
        println!();
        println!("   {:25} │ {:>10} │ {:>5}", "Category", "Amount", "%");
        println!("   ──────────────────────────┼────────────┼──────");

        for entry in category_breakdown(&receipts) {
            println!(
                "   {:25} │ {:>9.2} │ {:>4}%",
                truncate(&entry.category, 25),
                entry.amount,
                percent(entry.amount, total)
            );
        }
    }

    println!();
    for alert in budget_alerts(&receipts, budget) {
        let icon = match alert.severity {
            Severity::Danger => "🔴",
            Severity::Warning => "🟡",
            Severity::Info => "ℹ️ ",
            Severity::Ok => "🟢",
        };
        println!("   {} {}", icon, alert.message);
    }
    Ok(())
}

pub fn cmd_report_categories(data_path: &Path) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let receipts = ledger.receipts();
    let total = total_spending(receipts);
    let breakdown = category_breakdown(receipts);

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    if breakdown.is_empty() {
        println!("   No spending recorded.");
        return Ok(());
    }

    println!("   {:25} │ {:>10} │ {:>5}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼────────────┼──────");
    for entry in &breakdown {
        println!(
            "   {:25} │ {:>9.2} │ {:>4}%",
            truncate(&entry.category, 25),
            entry.amount,
            percent(entry.amount, total)
        );
    }
    println!("   ──────────────────────────┼────────────┼──────");
    println!("   {:25} │ {:>9.2} │ 100%", "Total", total);
    Ok(())
}

pub fn cmd_report_daily(data_path: &Path) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let daily = daily_spending(ledger.receipts());

    println!();
    println!("📅 Daily Spending");
    println!("   ─────────────────────────────────────────────────────────────");

    if daily.is_empty() {
        println!("   No spending recorded.");
        return Ok(());
    }

    for entry in &daily {
        println!("   {} │ {:>9.2}", entry.date, entry.amount);
    }
    Ok(())
}

pub fn cmd_report_stores(data_path: &Path, limit: usize) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let stores = top_stores(ledger.receipts(), limit);

    println!();
    println!("🏪 Top Stores");
    println!("   ─────────────────────────────────────────────────────────────");

    if stores.is_empty() {
        println!("   No spending recorded.");
        return Ok(());
    }

    for (rank, entry) in stores.iter().enumerate() {
        println!(
            "   {:2}. {:25} │ {:>9.2}",
            rank + 1,
            truncate(&entry.store, 25),
            entry.amount
        );
    }
    Ok(())
}

pub fn cmd_report_trend(data_path: &Path) -> Result<()> {
    let ledger = Ledger::open(data_path.to_path_buf());
    let trend = monthly_trend(ledger.receipts());

    println!();
    println!("📈 Monthly Trend");
    println!("   ─────────────────────────────────────────────────────────────");

    if trend.is_empty() {
        println!("   No spending recorded.");
        return Ok(());
    }

    for entry in &trend {
        println!("   {:18} │ {:>9.2}", entry.label, entry.amount);
    }
    Ok(())
}
