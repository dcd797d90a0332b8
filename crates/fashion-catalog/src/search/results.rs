//! Page snapshots and pagination metadata.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Pagination info as returned by the listing API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page (1-indexed).
    pub current_page: u32,
    /// Total number of pages.
    pub page_count: u32,
    /// Total number of items across all pages.
    pub count: u64,
    /// Items per page, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationMeta {
    /// Create pagination info.
    pub fn new(current_page: u32, page_count: u32, count: u64) -> Self {
        Self {
            current_page: current_page.max(1),
            page_count: page_count.max(1),
            count,
            page_size: None,
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Page numbers offered by the page selector, one per page.
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.page_count.max(1)
    }

    /// Zero-based index of the current page within [`page_numbers`](Self::page_numbers).
    pub fn selected_index(&self) -> usize {
        self.current_page.saturating_sub(1) as usize
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.page_count
    }
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// The active page of products together with its pagination metadata.
///
/// A snapshot is always replaced as a whole; it is never merged with a
/// previous one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Products on the active page.
    #[serde(rename = "result")]
    pub products: Vec<Product>,
    /// Pagination metadata for the active page.
    #[serde(rename = "meta")]
    pub pagination: PaginationMeta,
}

impl Snapshot {
    /// Create a snapshot.
    pub fn new(products: Vec<Product>, pagination: PaginationMeta) -> Self {
        Self {
            products,
            pagination,
        }
    }

    /// Create an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the page holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products on the page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_from_api_json() {
        let meta: PaginationMeta =
            serde_json::from_str(r#"{"currentPage":3,"pageCount":12,"pageSize":12,"count":139}"#)
                .unwrap();
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.page_count, 12);
        assert_eq!(meta.count, 139);
        assert_eq!(meta.page_size, Some(12));
        assert_eq!(meta.selected_index(), 2);
    }

    #[test]
    fn test_page_numbers_are_one_indexed() {
        let meta = PaginationMeta::new(1, 4, 40);
        assert_eq!(meta.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(meta.is_first());
        assert!(!meta.is_last());
    }

    #[test]
    fn test_default_meta_has_one_page() {
        let meta = PaginationMeta::default();
        assert_eq!(meta.page_numbers().count(), 1);
        assert_eq!(meta.count, 0);
    }

    #[test]
    fn test_snapshot_uses_api_field_names() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"result":[],"meta":{"currentPage":1,"pageCount":1,"count":0}}"#,
        )
        .unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.pagination, PaginationMeta::default());
    }
}
