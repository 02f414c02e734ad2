//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A line item on a receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    /// Unit price, non-negative, two decimal places
    pub price: f64,
}

/// A processed receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: i64,
    /// Display identifier, e.g. "RCP_0001"
    pub receipt_id: String,
    pub date: NaiveDate,
    pub store: String,
    /// Open set; the demo data uses Food, Shopping, Dining, Transport,
    /// Healthcare and Other, but any value is accepted
    pub category: String,
    pub items: Vec<ReceiptItem>,
    /// Invariant: equals the rounded sum of the rounded item prices
    pub total: f64,
    pub processed_at: DateTime<Utc>,
    /// Reference to the stored receipt image, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Format a display identifier from a 1-based ordinal
pub fn format_receipt_id(ordinal: usize) -> String {
    format!("RCP_{:04}", ordinal)
}

/// Spending for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Spending at one store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreTotal {
    pub store: String,
    pub amount: f64,
}

/// Spending on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Spending in one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthTotal {
    /// Sortable key, e.g. "2024-03"
    pub month: String,
    /// Display label, e.g. "March 2024"
    pub label: String,
    pub amount: f64,
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A budget status or category dominance alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub severity: Severity,
    pub message: String,
    /// Overage amount for danger alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Percent of budget (status alerts) or of total (dominance alerts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
    /// Dominant category name for dominance alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_severity_round_trip() {
        for sev in [Severity::Ok, Severity::Info, Severity::Warning, Severity::Danger] {
            assert_eq!(Severity::from_str(sev.as_str()).unwrap(), sev);
        }
        assert!(Severity::from_str("critical").is_err());
    }

    #[test]
    fn test_format_receipt_id() {
        assert_eq!(format_receipt_id(1), "RCP_0001");
        assert_eq!(format_receipt_id(42), "RCP_0042");
        assert_eq!(format_receipt_id(10000), "RCP_10000");
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = Receipt {
            id: 1,
            receipt_id: format_receipt_id(1),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            store: "Corner Market".to_string(),
            category: "Food".to_string(),
            items: vec![ReceiptItem {
                name: "Milk".to_string(),
                price: 3.49,
            }],
            total: 3.49,
            processed_at: Utc::now(),
            image: None,
        };

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"receiptId\":\"RCP_0001\""));
        assert!(json.contains("\"date\":\"2024-03-15\""));
        assert!(json.contains("\"processedAt\""));
        assert!(!json.contains("\"image\""));

        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back.receipt_id, receipt.receipt_id);
        assert_eq!(back.date, receipt.date);
        assert_eq!(back.items, receipt.items);
    }
}
