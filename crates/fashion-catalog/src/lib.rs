//! Catalogue types and the pure parts of the product view pipeline.
//!
//! This crate provides:
//!
//! - **Catalog**: products, identifiers, and the favorite set
//! - **Search**: filter pipeline, sort keys, page snapshots
//! - **Indicators**: new-product count, price percentiles, last release
//!
//! Nothing in here performs I/O; "today" is always passed in.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fashion_catalog::prelude::*;
//!
//! let products = vec![
//!     Product::new("a", "Tee", "loom", 10.0, "2024-01-01", "https://loom.example/tee"),
//!     Product::new("b", "Coat", "loom", 90.0, "2024-06-01", "https://loom.example/coat"),
//! ];
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//!
//! let cheap = filter_by_reasonable_price(&products, DEFAULT_PRICE_CEILING);
//! assert_eq!(cheap.len(), 1);
//!
//! let newest_first = apply_sort(&products, Some(SortKey::DateDesc));
//! assert_eq!(newest_first[0].id.as_str(), "b");
//!
//! let indicators = compute_indicators(&products, today);
//! assert_eq!(indicators.new_count, 1);
//! ```

pub mod error;
pub mod ids;
pub mod indicators;

pub mod catalog;
pub mod search;

pub use catalog::{FavoriteSet, Product};
pub use error::CatalogError;
pub use ids::ProductId;
pub use search::{PaginationMeta, Snapshot, SortKey};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{parse_release_date, FavoriteSet, Product};

    // Search
    pub use crate::search::{
        apply_sort, filter_by_favorites, filter_by_reasonable_price, filter_by_recent, Filter,
        FilterPipeline, FilterSettings, FilterToggles, PaginationMeta, Snapshot, SortKey,
        DEFAULT_PRICE_CEILING, DEFAULT_RECENCY_DAYS,
    };

    // Indicators
    pub use crate::indicators::{compute_indicators, Indicators, NEW_PRODUCT_WINDOW_DAYS};
}
