//! CSV export for receipts

use crate::models::Receipt;

/// Render receipts as CSV with the fixed header
/// `receiptId,date,store,category,total,itemCount`.
///
/// Fields are joined with commas and never quoted or escaped, so a store
/// name containing a comma corrupts its row. Known limitation, kept for
/// compatibility with existing consumers of the format.
pub fn receipts_csv(receipts: &[Receipt]) -> String {
    let mut csv = String::from("receiptId,date,store,category,total,itemCount\n");

    for receipt in receipts {
        csv.push_str(&format!(
            "{},{},{},{},{:.2},{}\n",
            receipt.receipt_id,
            receipt.date,
            receipt.store,
            receipt.category,
            receipt.total,
            receipt.items.len()
        ));
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{format_receipt_id, ReceiptItem};
    use chrono::Utc;

    fn receipt(id: i64, store: &str) -> Receipt {
        Receipt {
            id,
            receipt_id: format_receipt_id(id as usize),
            date: "2024-03-15".parse().unwrap(),
            store: store.to_string(),
            category: "Food".to_string(),
            items: vec![
                ReceiptItem {
                    name: "Milk".to_string(),
                    price: 3.49,
                },
                ReceiptItem {
                    name: "Bread".to_string(),
                    price: 2.99,
                },
            ],
            total: 6.48,
            processed_at: Utc::now(),
            image: None,
        }
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        assert_eq!(receipts_csv(&[]), "receiptId,date,store,category,total,itemCount\n");
    }

    #[test]
    fn test_csv_rows() {
        let csv = receipts_csv(&[receipt(1, "Corner Market"), receipt(2, "FreshMart")]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "receiptId,date,store,category,total,itemCount");
        assert_eq!(lines[1], "RCP_0001,2024-03-15,Corner Market,Food,6.48,2");
        assert_eq!(lines[2], "RCP_0002,2024-03-15,FreshMart,Food,6.48,2");
    }

    #[test]
    fn test_csv_does_not_escape_commas() {
        let csv = receipts_csv(&[receipt(1, "Salt, Pepper & Co")]);
        // No quoting: the comma in the store name splits the field
        assert!(csv.contains("RCP_0001,2024-03-15,Salt, Pepper & Co,Food,6.48,2"));
        assert!(!csv.contains('"'));
    }
}
