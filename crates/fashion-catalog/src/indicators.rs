//! Derived indicators over a product list.
//!
//! Indicators are recomputed from scratch for every render and never cached.
//! The new-product count uses a strict threshold (`released > today - days`)
//! whereas the recency filter keeps the boundary day; the two intentionally
//! disagree on products released exactly `days` days ago.

use crate::catalog::Product;
use crate::search::recency_threshold;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trailing window, in days, for counting new products.
pub const NEW_PRODUCT_WINDOW_DAYS: i64 = 14;

/// Indicators shown alongside a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Products released within the trailing window.
    pub new_count: usize,
    /// Median price.
    pub p50: Option<f64>,
    /// 90th percentile price.
    pub p90: Option<f64>,
    /// 95th percentile price.
    pub p95: Option<f64>,
    /// Most recent release date.
    pub last_released: Option<NaiveDate>,
}

impl Indicators {
    /// Check whether the indicators were computed over an empty list.
    pub fn is_empty(&self) -> bool {
        self.p50.is_none()
    }
}

/// Compute all indicators for `products` as of `today`.
pub fn compute_indicators(products: &[Product], today: NaiveDate) -> Indicators {
    let [p50, p90, p95] = price_percentiles(products, [50.0, 90.0, 95.0]);
    Indicators {
        new_count: count_new_products(products, today, NEW_PRODUCT_WINDOW_DAYS),
        p50,
        p90,
        p95,
        last_released: last_released(products),
    }
}

/// Count products released strictly after `today - days`.
pub fn count_new_products(products: &[Product], today: NaiveDate, days: i64) -> usize {
    let threshold = recency_threshold(today, days);
    products
        .iter()
        .filter_map(Product::released_on)
        .filter(|released| *released > threshold)
        .count()
}

/// Price at percentile `p` (0..=100).
///
/// Prices are sorted ascending and the value at index
/// `round((n - 1) * p / 100)` is returned. `None` for an empty list.
pub fn percentile(products: &[Product], p: f64) -> Option<f64> {
    let [value] = price_percentiles(products, [p]);
    value
}

/// Several percentiles over a single sort of the prices.
pub fn price_percentiles<const N: usize>(products: &[Product], ps: [f64; N]) -> [Option<f64>; N] {
    let mut prices: Vec<f64> = products.iter().map(|product| product.price).collect();
    prices.sort_by(f64::total_cmp);

    ps.map(|p| {
        let last = prices.len().checked_sub(1)?;
        let index = ((last as f64) * (p / 100.0)).round() as usize;
        prices.get(index.min(last)).copied()
    })
}

/// Most recent parseable release date.
pub fn last_released(products: &[Product]) -> Option<NaiveDate> {
    products.iter().filter_map(Product::released_on).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(price: f64, released: &str) -> Product {
        Product::new(format!("{price}-{released}"), "n", "b", price, released, "l")
    }

    #[test]
    fn test_empty_list_has_no_numeric_indicators() {
        let indicators = compute_indicators(&[], day(2024, 6, 15));
        assert_eq!(indicators.new_count, 0);
        assert_eq!(indicators.p50, None);
        assert_eq!(indicators.p90, None);
        assert_eq!(indicators.p95, None);
        assert_eq!(indicators.last_released, None);
        assert!(indicators.is_empty());
    }

    #[test]
    fn test_single_element_percentiles() {
        let products = vec![product(42.0, "2024-01-01")];
        for p in [50.0, 90.0, 95.0] {
            assert_eq!(percentile(&products, p), Some(42.0));
        }
    }

    #[test]
    fn test_percentile_rounding() {
        // n = 10 -> indices 5 (4.5 rounds up), 8 (8.1), 9 (8.55)
        let products: Vec<Product> = (1..=10)
            .rev()
            .map(|i| product(i as f64 * 10.0, "2024-01-01"))
            .collect();
        let [p50, p90, p95] = price_percentiles(&products, [50.0, 90.0, 95.0]);
        assert_eq!(p50, Some(60.0));
        assert_eq!(p90, Some(90.0));
        assert_eq!(p95, Some(100.0));
    }

    #[test]
    fn test_new_count_excludes_boundary_day() {
        let today = day(2024, 6, 15);
        let products = vec![
            product(1.0, "2024-06-01"),
            product(1.0, "2024-06-02"),
            product(1.0, "2024-06-15"),
            product(1.0, "garbage"),
        ];
        assert_eq!(count_new_products(&products, today, 14), 2);

        let kept = crate::search::filter_by_recent(&products, today, 14);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_last_released_skips_unparseable() {
        let products = vec![
            product(1.0, "2023-11-30"),
            product(1.0, "tbd"),
            product(1.0, "2024-02-29"),
        ];
        assert_eq!(last_released(&products), Some(day(2024, 2, 29)));
    }

    #[test]
    fn test_compute_indicators() {
        let products = vec![product(10.0, "2024-01-01"), product(90.0, "2024-06-10")];
        let indicators = compute_indicators(&products, day(2024, 6, 15));
        assert_eq!(indicators.new_count, 1);
        assert_eq!(indicators.p50, Some(90.0));
        assert_eq!(indicators.p95, Some(90.0));
        assert_eq!(indicators.last_released, Some(day(2024, 6, 10)));
    }
}
