//! Sort keys for product listings.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparator used to order two products.
pub type Comparator = fn(&Product, &Product) -> Ordering;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by release date, oldest first.
    DateAsc,
    /// Sort by release date, newest first.
    DateDesc,
}

/// Every sort key with its wire name, label and comparator.
static SORT_TABLE: [(SortKey, &str, &str, Comparator); 4] = [
    (SortKey::PriceAsc, "price-asc", "Cheap first", by_price_asc),
    (SortKey::PriceDesc, "price-desc", "Expensive first", by_price_desc),
    (SortKey::DateAsc, "date-asc", "Old releases first", by_date_asc),
    (SortKey::DateDesc, "date-desc", "Recent releases first", by_date_desc),
];

impl SortKey {
    /// All sort keys, in selector order.
    pub fn all() -> impl Iterator<Item = SortKey> {
        SORT_TABLE.iter().map(|(key, ..)| *key)
    }

    /// Look up a sort key by its wire name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<SortKey> {
        SORT_TABLE
            .iter()
            .find(|(_, wire, ..)| *wire == name)
            .map(|(key, ..)| *key)
    }

    /// Wire name (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    pub fn display_name(&self) -> &'static str {
        self.entry().2
    }

    /// Comparator for this key.
    pub fn comparator(&self) -> Comparator {
        self.entry().3
    }

    fn entry(&self) -> &'static (SortKey, &'static str, &'static str, Comparator) {
        SORT_TABLE
            .iter()
            .find(|(key, ..)| key == self)
            .unwrap_or(&SORT_TABLE[0])
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::parse(s).ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

fn by_price_asc(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_desc(a: &Product, b: &Product) -> Ordering {
    b.price.total_cmp(&a.price)
}

// Unparseable dates compare as `None`, i.e. before every real date.
fn by_date_asc(a: &Product, b: &Product) -> Ordering {
    a.released_on().cmp(&b.released_on())
}

fn by_date_desc(a: &Product, b: &Product) -> Ordering {
    b.released_on().cmp(&a.released_on())
}

/// Return a sorted copy of `products`.
///
/// The sort is stable, so ties keep their input order. Without a key the
/// copy is returned in input order.
pub fn apply_sort(products: &[Product], key: Option<SortKey>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    if let Some(key) = key {
        sorted.sort_by(key.comparator());
    }
    sorted
}
