//! Spending reports
//!
//! Pure functions over a slice of receipts. Every function is stateless and
//! recomputes from scratch on each call; results are never cached.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{BudgetAlert, CategoryTotal, DailyTotal, MonthTotal, Receipt, Severity, StoreTotal};
use crate::money::{percent, round2};

/// Default number of stores in the top-stores report
pub const DEFAULT_TOP_STORES: usize = 5;

/// Budget fraction above which a warning fires
const WARNING_THRESHOLD: f64 = 0.8;

/// Share of total spending above which a category counts as dominant
const DOMINANCE_THRESHOLD: f64 = 0.4;

/// Receipts whose date falls in `month` ("YYYY-MM"). A malformed month
/// matches nothing.
pub fn filter_by_month(receipts: &[Receipt], month: &str) -> Vec<Receipt> {
    if !is_valid_month(month) {
        return Vec::new();
    }
    receipts
        .iter()
        .filter(|r| r.date.format("%Y-%m").to_string() == month)
        .cloned()
        .collect()
}

fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
}

/// Sum of receipt totals, rounded to cents
pub fn total_spending(receipts: &[Receipt]) -> f64 {
    round2(receipts.iter().map(|r| r.total).sum())
}

/// Per-category totals, largest first. Ties keep first-seen order.
pub fn category_breakdown(receipts: &[Receipt]) -> Vec<CategoryTotal> {
    let mut amounts: HashMap<&str, f64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for receipt in receipts {
        if !amounts.contains_key(receipt.category.as_str()) {
            order.push(receipt.category.as_str());
        }
        *amounts.entry(receipt.category.as_str()).or_insert(0.0) += receipt.total;
    }

    let mut breakdown: Vec<CategoryTotal> = order
        .into_iter()
        .map(|category| CategoryTotal {
            category: category.to_string(),
            amount: round2(amounts.get(category).copied().unwrap_or(0.0)),
        })
        .collect();

    // Stable sort keeps first-seen order for equal amounts
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

/// Per-day totals in chronological order
pub fn daily_spending(receipts: &[Receipt]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for receipt in receipts {
        *days.entry(receipt.date).or_insert(0.0) += receipt.total;
    }

    days.into_iter()
        .map(|(date, amount)| DailyTotal {
            date,
            amount: round2(amount),
        })
        .collect()
}

/// Highest-spend stores, largest first, truncated to `limit`.
/// Ties keep first-seen order.
pub fn top_stores(receipts: &[Receipt], limit: usize) -> Vec<StoreTotal> {
    let mut amounts: HashMap<&str, f64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for receipt in receipts {
        if !amounts.contains_key(receipt.store.as_str()) {
            order.push(receipt.store.as_str());
        }
        *amounts.entry(receipt.store.as_str()).or_insert(0.0) += receipt.total;
    }

    let mut stores: Vec<StoreTotal> = order
        .into_iter()
        .map(|store| StoreTotal {
            store: store.to_string(),
            amount: round2(amounts.get(store).copied().unwrap_or(0.0)),
        })
        .collect();

    stores.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    stores.truncate(limit);
    stores
}

/// Per-month totals in chronological order, with display labels
pub fn monthly_trend(receipts: &[Receipt]) -> Vec<MonthTotal> {
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for receipt in receipts {
        let key = receipt.date.format("%Y-%m").to_string();
        *months.entry(key).or_insert(0.0) += receipt.total;
    }

    months
        .into_iter()
        .map(|(month, amount)| {
            let label = month_label(&month);
            MonthTotal {
                month,
                label,
                amount: round2(amount),
            }
        })
        .collect()
}

/// "2024-03" -> "March 2024". Falls back to the key if it does not parse.
fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}

/// Budget status plus category dominance alerts.
///
/// Exactly one status alert is produced: danger when spending exceeds the
/// limit, warning above 80% of it, ok otherwise. A zero or negative limit is
/// taken at face value, so any spending at all is over budget. When one
/// category carries more than 40% of a non-zero total, an info alert follows.
pub fn budget_alerts(receipts: &[Receipt], budget_limit: f64) -> Vec<BudgetAlert> {
    let total = total_spending(receipts);
    let mut alerts = Vec::new();

    if total > budget_limit {
        let overage = round2(total - budget_limit);
        alerts.push(BudgetAlert {
            severity: Severity::Danger,
            message: format!("Over budget by ${:.2}", overage),
            amount: Some(overage),
            percent: None,
            category: None,
        });
    } else if total > WARNING_THRESHOLD * budget_limit {
        alerts.push(BudgetAlert {
            severity: Severity::Warning,
            message: format!("At {}% of budget", percent(total, budget_limit)),
            amount: None,
            percent: Some(percent(total, budget_limit)),
            category: None,
        });
    } else {
        alerts.push(BudgetAlert {
            severity: Severity::Ok,
            message: format!("Within budget ({}% used)", percent(total, budget_limit)),
            amount: None,
            percent: Some(percent(total, budget_limit)),
            category: None,
        });
    }

    let breakdown = category_breakdown(receipts);
    if let Some(top) = breakdown.first() {
        if total > 0.0 && top.amount > DOMINANCE_THRESHOLD * total {
            alerts.push(BudgetAlert {
                severity: Severity::Info,
                message: format!(
                    "{} accounts for {}% of spending",
                    top.category,
                    percent(top.amount, total)
                ),
                amount: None,
                percent: Some(percent(top.amount, total)),
                category: Some(top.category.clone()),
            });
        }
    }

    alerts
}
