//! Money arithmetic
//!
//! All amounts are f64 dollars rounded to cents with half-away-from-zero
//! rounding. Totals are always derived the same way: round each input,
//! sum, round the sum again.

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Canonical receipt total: round each price, sum, round again
pub fn sum_rounded(prices: impl IntoIterator<Item = f64>) -> f64 {
    round2(prices.into_iter().map(round2).sum())
}

/// Integer percentage of `part` in `whole`, rounded to the nearest whole
/// percent. Zero when `whole` is zero or negative.
pub fn percent(part: f64, whole: f64) -> i64 {
    if whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_halves_away_from_zero() {
        // .125 and .375 are exact in binary, so the half is a true half
        assert_eq!(round2(10.125), 10.13);
        assert_eq!(round2(2.375), 2.38);
        assert_eq!(round2(-10.125), -10.13);
        assert_eq!(round2(2.374), 2.37);
    }

    #[test]
    fn test_sum_rounded_rounds_inputs_first() {
        // 1.125 -> 1.13 and 2.375 -> 2.38 before summing
        assert_eq!(sum_rounded([1.125, 2.375]), 3.51);
        assert_eq!(sum_rounded([]), 0.0);
        assert_eq!(sum_rounded([0.1, 0.2]), 0.3);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(850.0, 1000.0), 85);
        assert_eq!(percent(300.0, 1000.0), 30);
        assert_eq!(percent(0.0, 1000.0), 0);
        assert_eq!(percent(500.0, 0.0), 0);
        assert_eq!(percent(500.0, -100.0), 0);
        // 0.5 percent rounds up
        assert_eq!(percent(125.0, 1000.0), 13);
    }
}
