//! User-facing controls and the changes they emit.

use fashion_catalog::search::{FilterToggles, SortKey};
use fashion_catalog::ProductId;
use fashion_data::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Current value of every control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Products requested per page.
    pub page_size: u32,
    /// Brand restriction, `None` for all brands.
    pub brand: Option<String>,
    /// Active filter checkboxes.
    pub filters: FilterToggles,
    /// Active sort key, `None` keeps API order.
    pub sort: Option<SortKey>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            brand: None,
            filters: FilterToggles::default(),
            sort: None,
        }
    }
}

impl Controls {
    /// Set page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set brand restriction.
    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand.filter(|b| !b.trim().is_empty());
        self
    }

    /// Set filter toggles.
    pub fn with_filters(mut self, filters: FilterToggles) -> Self {
        self.filters = filters;
        self
    }

    /// Set sort key.
    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }
}

/// A change notification from one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    /// Page size selector.
    PageSize(u32),
    /// Page selector, 1-indexed.
    Page(u32),
    /// Brand selector.
    Brand(Option<String>),
    /// Recency checkbox.
    RecentOnly(bool),
    /// Reasonable-price checkbox.
    ReasonablePriceOnly(bool),
    /// Favorites checkbox.
    FavoritesOnly(bool),
    /// Sort selector.
    Sort(Option<SortKey>),
    /// Favorite button on a product card.
    ToggleFavorite(ProductId),
}

impl ControlChange {
    /// Check if the change needs a new page from the API.
    pub fn requires_fetch(&self) -> bool {
        matches!(
            self,
            ControlChange::PageSize(_) | ControlChange::Page(_) | ControlChange::Brand(_)
        )
    }
}
