//! Search module.
//!
//! Contains the filter pipeline, sort keys, and page snapshots.

mod filter;
mod results;
mod sort;

pub use filter::{
    filter_by_favorites, filter_by_reasonable_price, filter_by_recent, recency_threshold,
    Filter, FilterPipeline, FilterSettings, FilterToggles, DEFAULT_PRICE_CEILING,
    DEFAULT_RECENCY_DAYS,
};
pub use results::{PaginationMeta, Snapshot};
pub use sort::{apply_sort, Comparator, SortKey};
