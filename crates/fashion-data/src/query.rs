//! Listing query parameters.

use serde::{Deserialize, Serialize};

/// First page of the listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Products per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// A paginated listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Page to fetch (1-indexed).
    pub page: u32,
    /// Products per page.
    pub size: u32,
    /// Restrict to a single brand.
    pub brand: Option<String>,
}

impl ListingQuery {
    /// Create a query for `page` with `size` products per page.
    ///
    /// Both values are clamped to at least 1.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
            brand: None,
        }
    }

    /// Restrict to a brand. An empty brand leaves the query unfiltered.
    pub fn with_brand(mut self, brand: Option<impl Into<String>>) -> Self {
        self.brand = brand.map(Into::into).filter(|b: &String| !b.trim().is_empty());
        self
    }

    /// Query string pairs: `page`, `size`, and `brand` only when set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(brand) = &self.brand {
            pairs.push(("brand", brand.clone()));
        }
        pairs
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ListingQuery::default();
        assert_eq!(
            query.query_pairs(),
            vec![("page", "1".to_string()), ("size", "12".to_string())]
        );
    }

    #[test]
    fn test_brand_only_when_supplied() {
        let query = ListingQuery::new(2, 24).with_brand(Some("loom"));
        assert_eq!(query.query_pairs().len(), 3);
        assert_eq!(query.query_pairs()[2], ("brand", "loom".to_string()));

        let blank = ListingQuery::new(2, 24).with_brand(Some("  "));
        assert_eq!(blank.brand, None);
        assert_eq!(blank.query_pairs().len(), 2);

        let none = ListingQuery::new(2, 24).with_brand(None::<String>);
        assert_eq!(none.brand, None);
    }

    #[test]
    fn test_page_and_size_clamped() {
        let query = ListingQuery::new(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 1);
    }
}
