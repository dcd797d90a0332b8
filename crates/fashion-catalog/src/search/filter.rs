//! Product filters.
//!
//! Each filter is a pure predicate over a single product. Active filters are
//! AND-composed by [`FilterPipeline`]; since every predicate looks at a
//! different field, the order of application does not change the result.

use crate::catalog::{FavoriteSet, Product};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Trailing window, in days, for the "recently released" filter.
pub const DEFAULT_RECENCY_DAYS: i64 = 14;

/// Highest price considered reasonable.
pub const DEFAULT_PRICE_CEILING: f64 = 50.0;

/// A product filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<'a> {
    /// Released on or after the given date (inclusive).
    ReleasedSince(NaiveDate),
    /// Price at or below the given ceiling (inclusive).
    PriceAtMost(f64),
    /// Member of the favorite set.
    Favorites(&'a FavoriteSet),
}

impl<'a> Filter<'a> {
    /// Create a recency filter relative to `today`.
    pub fn recent(today: NaiveDate, days: i64) -> Self {
        Filter::ReleasedSince(recency_threshold(today, days))
    }

    /// Create a price ceiling filter.
    pub fn reasonable_price(ceiling: f64) -> Self {
        Filter::PriceAtMost(ceiling)
    }

    /// Create a favorites filter.
    pub fn favorites(favorites: &'a FavoriteSet) -> Self {
        Filter::Favorites(favorites)
    }

    /// Check whether a product passes this filter.
    ///
    /// Products with an unparseable release date never pass the recency
    /// filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::ReleasedSince(threshold) => product
                .released_on()
                .is_some_and(|released| released >= *threshold),
            Filter::PriceAtMost(ceiling) => product.price <= *ceiling,
            Filter::Favorites(favorites) => favorites.contains(&product.id),
        }
    }
}

/// First day inside a trailing window of `days` days ending `today`.
///
/// Windows reaching past the representable calendar saturate at
/// [`NaiveDate::MIN`] (or [`NaiveDate::MAX`] for negative windows).
pub fn recency_threshold(today: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|window| today.checked_sub_signed(window))
        .unwrap_or(if days < 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Keep products released within the last `days` days, boundary included.
pub fn filter_by_recent(products: &[Product], today: NaiveDate, days: i64) -> Vec<Product> {
    FilterPipeline::new()
        .with_filter(Filter::recent(today, days))
        .apply(products)
}

/// Keep products priced at or below `ceiling`.
pub fn filter_by_reasonable_price(products: &[Product], ceiling: f64) -> Vec<Product> {
    FilterPipeline::new()
        .with_filter(Filter::reasonable_price(ceiling))
        .apply(products)
}

/// Keep favorited products.
pub fn filter_by_favorites(products: &[Product], favorites: &FavoriteSet) -> Vec<Product> {
    FilterPipeline::new()
        .with_filter(Filter::favorites(favorites))
        .apply(products)
}

/// Which filters the user has switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterToggles {
    /// Only recently released products.
    pub recent_only: bool,
    /// Only reasonably priced products.
    pub reasonable_price_only: bool,
    /// Only favorited products.
    pub favorites_only: bool,
}

/// Tunable thresholds for the filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Trailing window for the recency filter.
    pub recency_days: i64,
    /// Ceiling for the reasonable-price filter.
    pub price_ceiling: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            recency_days: DEFAULT_RECENCY_DAYS,
            price_ceiling: DEFAULT_PRICE_CEILING,
        }
    }
}

/// AND-composition of filters.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline<'a> {
    filters: Vec<Filter<'a>>,
}

impl<'a> FilterPipeline<'a> {
    /// Create an empty pipeline (identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the pipeline for the active toggles.
    ///
    /// `favorites` is only consulted when the favorites toggle is on.
    pub fn from_toggles(
        toggles: FilterToggles,
        settings: FilterSettings,
        today: NaiveDate,
        favorites: &'a FavoriteSet,
    ) -> Self {
        let mut pipeline = Self::new();
        if toggles.recent_only {
            pipeline.filters.push(Filter::recent(today, settings.recency_days));
        }
        if toggles.reasonable_price_only {
            pipeline
                .filters
                .push(Filter::reasonable_price(settings.price_ceiling));
        }
        if toggles.favorites_only {
            pipeline.filters.push(Filter::favorites(favorites));
        }
        pipeline
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter<'a>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }

    /// Return the products passing every filter, in input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: &str, price: f64, released: &str) -> Product {
        Product::new(id, id, "brand", price, released, "https://example.com")
    }

    #[test]
    fn test_reasonable_price_includes_ceiling() {
        let products = vec![
            product("a", 49.99, "2024-01-01"),
            product("b", 50.0, "2024-01-01"),
            product("c", 50.01, "2024-01-01"),
        ];
        let kept = filter_by_reasonable_price(&products, 50.0);
        let ids: Vec<_> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_recent_includes_boundary_day() {
        let today = day(2024, 6, 15);
        let products = vec![
            product("before", 10.0, "2024-05-31"),
            product("boundary", 10.0, "2024-06-01"),
            product("inside", 10.0, "2024-06-10"),
        ];
        let kept = filter_by_recent(&products, today, 14);
        let ids: Vec<_> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["boundary", "inside"]);
    }

    #[test]
    fn test_oversized_window_keeps_everything() {
        let today = day(2024, 6, 15);
        let products = vec![product("old", 10.0, "1999-01-01"), product("new", 10.0, "2024-06-14")];

        assert_eq!(recency_threshold(today, 1_000_000_000), NaiveDate::MIN);
        assert_eq!(filter_by_recent(&products, today, 1_000_000_000).len(), 2);
        assert_eq!(filter_by_recent(&products, today, i64::MAX).len(), 2);
        assert!(filter_by_recent(&products, today, i64::MIN).is_empty());
    }

    #[test]
    fn test_recent_drops_unparseable_dates() {
        let products = vec![product("bad", 10.0, "not-a-date")];
        assert!(filter_by_recent(&products, day(2024, 6, 15), 14).is_empty());
    }

    #[test]
    fn test_favorites_filter() {
        let favorites: FavoriteSet = vec![ProductId::new("b")].into_iter().collect();
        let products = vec![product("a", 1.0, "2024-01-01"), product("b", 1.0, "2024-01-01")];
        let kept = filter_by_favorites(&products, &favorites);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id.as_str(), "b");
    }

    #[test]
    fn test_no_toggles_is_identity() {
        let favorites = FavoriteSet::new();
        let products = vec![product("a", 500.0, "2001-01-01"), product("b", 1.0, "bad")];
        let pipeline = FilterPipeline::from_toggles(
            FilterToggles::default(),
            FilterSettings::default(),
            day(2024, 6, 15),
            &favorites,
        );
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(&products), products);
    }

    #[test]
    fn test_toggles_compose_with_and() {
        let favorites: FavoriteSet = vec![ProductId::new("cheap-new"), ProductId::new("pricey-new")]
            .into_iter()
            .collect();
        let products = vec![
            product("cheap-new", 20.0, "2024-06-10"),
            product("pricey-new", 80.0, "2024-06-10"),
            product("cheap-old", 20.0, "2023-01-01"),
        ];
        let toggles = FilterToggles {
            recent_only: true,
            reasonable_price_only: true,
            favorites_only: true,
        };
        let pipeline =
            FilterPipeline::from_toggles(toggles, FilterSettings::default(), day(2024, 6, 15), &favorites);
        let kept = pipeline.apply(&products);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id.as_str(), "cheap-new");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let favorites = FavoriteSet::new();
        let toggles = FilterToggles {
            recent_only: true,
            reasonable_price_only: true,
            favorites_only: false,
        };
        let pipeline =
            FilterPipeline::from_toggles(toggles, FilterSettings::default(), day(2024, 6, 15), &favorites);
        assert!(pipeline.apply(&[]).is_empty());
    }
}
