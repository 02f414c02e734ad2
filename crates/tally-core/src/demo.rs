//! Demo receipt generation
//!
//! Produces plausible receipts spread across 2024 so the reports have
//! something to show before any real uploads happen.

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use crate::models::{format_receipt_id, Receipt, ReceiptItem};
use crate::money::sum_rounded;

/// Store and item pool for one category
struct CategoryPool {
    category: &'static str,
    stores: &'static [&'static str],
    items: &'static [(&'static str, f64)],
}

const POOLS: &[CategoryPool] = &[
    CategoryPool {
        category: "Food",
        stores: &["Corner Market", "FreshMart", "Greenfield Grocers"],
        items: &[
            ("Milk", 3.49),
            ("Bread", 2.99),
            ("Eggs", 4.25),
            ("Apples", 5.10),
            ("Coffee", 9.99),
            ("Cheese", 6.75),
        ],
    },
    CategoryPool {
        category: "Shopping",
        stores: &["Maple & Co", "Downtown Outfitters", "Page One Books"],
        items: &[
            ("T-shirt", 14.99),
            ("Notebook", 4.50),
            ("Desk lamp", 27.00),
            ("Paperback", 11.99),
            ("Socks", 7.25),
        ],
    },
    CategoryPool {
        category: "Dining",
        stores: &["Luna Cafe", "Brick Oven Pizzeria", "Saigon Kitchen"],
        items: &[
            ("Lunch special", 12.50),
            ("Margherita pizza", 16.00),
            ("Pho", 13.25),
            ("Latte", 4.75),
            ("Dessert", 6.50),
        ],
    },
    CategoryPool {
        category: "Transport",
        stores: &["Metro Transit", "City Fuel", "Bay Bridge Tolls"],
        items: &[
            ("Day pass", 5.50),
            ("Fuel", 42.80),
            ("Toll", 7.00),
            ("Parking", 12.00),
        ],
    },
    CategoryPool {
        category: "Healthcare",
        stores: &["City Pharmacy", "Wellness Clinic"],
        items: &[
            ("Ibuprofen", 8.49),
            ("Vitamins", 15.99),
            ("Bandages", 4.29),
            ("Copay", 25.00),
        ],
    },
    CategoryPool {
        category: "Other",
        stores: &["Ace Hardware", "Pet Corner"],
        items: &[
            ("Batteries", 6.99),
            ("Light bulbs", 9.49),
            ("Dog food", 21.50),
            ("Duct tape", 5.25),
        ],
    },
];

/// Generate `count` demo receipts with ids and display ids assigned from 1
pub fn demo_receipts(count: usize, rng: &mut impl Rng) -> Vec<Receipt> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    (0..count)
        .map(|i| {
            let pool = &POOLS[rng.gen_range(0..POOLS.len())];
            let store = pool.stores[rng.gen_range(0..pool.stores.len())];

            let item_count = rng.gen_range(1..=4);
            let items: Vec<ReceiptItem> = (0..item_count)
                .map(|_| {
                    let (name, price) = pool.items[rng.gen_range(0..pool.items.len())];
                    ReceiptItem {
                        name: name.to_string(),
                        price,
                    }
                })
                .collect();

            // 2024 is a leap year
            let date = start
                .checked_add_days(Days::new(rng.gen_range(0..366)))
                .unwrap_or(start);

            Receipt {
                id: (i + 1) as i64,
                receipt_id: format_receipt_id(i + 1),
                date,
                store: store.to_string(),
                category: pool.category.to_string(),
                items: items.clone(),
                total: sum_rounded(items.iter().map(|item| item.price)),
                processed_at: Utc::now(),
                image: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{round2, sum_rounded};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_receipts_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let receipts = demo_receipts(25, &mut rng);

        assert_eq!(receipts.len(), 25);
        assert_eq!(receipts[0].receipt_id, "RCP_0001");
        assert_eq!(receipts[24].receipt_id, "RCP_0025");

        for receipt in &receipts {
            assert!(!receipt.items.is_empty());
            assert_eq!(receipt.date.format("%Y").to_string(), "2024");
            assert_eq!(
                receipt.total,
                sum_rounded(receipt.items.iter().map(|item| item.price))
            );
            assert_eq!(receipt.total, round2(receipt.total));
        }
    }

    #[test]
    fn test_demo_receipts_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(demo_receipts(0, &mut rng).is_empty());
    }
}
