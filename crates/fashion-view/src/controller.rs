//! View controller: fetch, filter, sort, compute indicators, render.

use fashion_cache::{FavoritesStore, KeyValueStore};
use fashion_catalog::catalog::{FavoriteSet, Product};
use fashion_catalog::indicators::{compute_indicators, Indicators};
use fashion_catalog::search::{apply_sort, FilterPipeline, FilterSettings, PaginationMeta, Snapshot};
use fashion_data::{FetchOutcome, ListingQuery, ListingSource, ProductFetcher};
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::controls::{ControlChange, Controls};
use crate::error::ViewError;
use crate::markup::{
    format_date, format_price, render_brand_options, render_page_options, render_products,
    render_sort_options,
};
use crate::render::{Renderer, Slot};

/// Whether a fetch is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// State owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Current page of products and its pagination.
    pub snapshot: Snapshot,
    /// Current control values.
    pub controls: Controls,
    /// Fetch phase.
    pub phase: Phase,
    /// Known brands, loaded once.
    pub brands: Vec<String>,
    /// Reason the latest fetch fell back, if it did.
    pub last_fallback: Option<String>,
}

/// What the latest render put on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    /// Filtered and sorted products.
    pub products: Vec<Product>,
    /// Indicators over `products`.
    pub indicators: Indicators,
    /// Pagination of the underlying page.
    pub pagination: PaginationMeta,
    /// Set when the data shown is a fallback after a failed fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Orchestrates the product view.
///
/// Takes `&mut self` on every operation, so one controller processes one
/// change at a time. The last fetch to complete replaces the snapshot.
pub struct ViewController<S, K, R, C = SystemClock>
where
    S: ListingSource,
    K: KeyValueStore,
    R: Renderer,
    C: Clock,
{
    fetcher: ProductFetcher<S>,
    favorites: FavoritesStore<K>,
    renderer: R,
    clock: C,
    settings: FilterSettings,
    state: ViewState,
}

impl<S, K, R> ViewController<S, K, R, SystemClock>
where
    S: ListingSource,
    K: KeyValueStore,
    R: Renderer,
{
    /// Create a controller using the system clock and default settings.
    pub fn new(source: S, favorites: FavoritesStore<K>, renderer: R) -> Self {
        Self {
            fetcher: ProductFetcher::new(source),
            favorites,
            renderer,
            clock: SystemClock,
            settings: FilterSettings::default(),
            state: ViewState::default(),
        }
    }
}

impl<S, K, R, C> ViewController<S, K, R, C>
where
    S: ListingSource,
    K: KeyValueStore,
    R: Renderer,
    C: Clock,
{
    /// Replace the clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ViewController<S, K, R, C2> {
        ViewController {
            fetcher: self.fetcher,
            favorites: self.favorites,
            renderer: self.renderer,
            clock,
            settings: self.settings,
            state: self.state,
        }
    }

    /// Set filter thresholds.
    pub fn with_settings(mut self, settings: FilterSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set initial control values.
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.state.controls = controls;
        self
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Rendering surface.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Favorites store.
    pub fn favorites(&self) -> &FavoritesStore<K> {
        &self.favorites
    }

    /// Initial load: brands, then `page` with the current controls.
    pub async fn load(&mut self, page: u32) -> RenderedView {
        self.state.brands = self.fetcher.brands().await;
        debug!(brands = self.state.brands.len(), "loaded brands");
        self.refresh(page).await
    }

    /// Apply a control change.
    ///
    /// Page, page size and brand changes re-fetch; every other change
    /// re-renders the current snapshot.
    pub async fn handle(&mut self, change: ControlChange) -> Result<RenderedView, ViewError> {
        debug!(?change, fetch = change.requires_fetch(), "control changed");
        let current_page = self.state.snapshot.pagination.current_page;

        let view = match change {
            ControlChange::PageSize(size) => {
                self.state.controls.page_size = size.max(1);
                self.refresh(current_page).await
            }
            ControlChange::Page(page) => self.refresh(page).await,
            ControlChange::Brand(brand) => {
                self.state.controls.brand = brand.filter(|b| !b.trim().is_empty());
                self.refresh(current_page).await
            }
            ControlChange::RecentOnly(on) => {
                self.state.controls.filters.recent_only = on;
                self.render()
            }
            ControlChange::ReasonablePriceOnly(on) => {
                self.state.controls.filters.reasonable_price_only = on;
                self.render()
            }
            ControlChange::FavoritesOnly(on) => {
                self.state.controls.filters.favorites_only = on;
                self.render()
            }
            ControlChange::Sort(sort) => {
                self.state.controls.sort = sort;
                self.render()
            }
            ControlChange::ToggleFavorite(id) => {
                let now_favorite = self.favorites.toggle(&id)?;
                info!(id = %id, favorite = now_favorite, "favorite toggled");
                self.render()
            }
        };

        Ok(view)
    }

    /// Fetch `page` with the current controls, adopt the result and render.
    ///
    /// A failed fetch keeps the previous snapshot.
    pub async fn refresh(&mut self, page: u32) -> RenderedView {
        let query = ListingQuery::new(page, self.state.controls.page_size)
            .with_brand(self.state.controls.brand.clone());

        self.state.phase = Phase::Loading;
        let outcome = self.fetcher.fetch(&query, &self.state.snapshot).await;
        self.state.phase = Phase::Idle;

        match outcome {
            FetchOutcome::Fresh(snapshot) => {
                self.state.snapshot = snapshot;
                self.state.last_fallback = None;
            }
            FetchOutcome::Fallback { snapshot, reason } => {
                self.state.snapshot = snapshot;
                self.state.last_fallback = Some(reason);
            }
        }

        self.render()
    }

    /// Filter, sort, compute indicators and write every slot.
    pub fn render(&mut self) -> RenderedView {
        let favorites = self.favorites.list_favorites();
        let today = self.clock.today();
        let view = self.compose(&favorites, today);

        let pagination = &self.state.snapshot.pagination;
        let controls = &self.state.controls;
        let indicators = &view.indicators;

        self.renderer
            .replace(Slot::Products, &render_products(&view.products, &favorites));
        self.renderer
            .replace(Slot::PageSelect, &render_page_options(pagination));
        self.renderer.replace(
            Slot::BrandSelect,
            &render_brand_options(&self.state.brands, controls.brand.as_deref()),
        );
        self.renderer
            .replace(Slot::SortSelect, &render_sort_options(controls.sort));
        self.renderer
            .replace(Slot::TotalCount, &pagination.count.to_string());
        self.renderer
            .replace(Slot::NewCount, &indicators.new_count.to_string());
        self.renderer.replace(Slot::P50, &format_price(indicators.p50));
        self.renderer.replace(Slot::P90, &format_price(indicators.p90));
        self.renderer.replace(Slot::P95, &format_price(indicators.p95));
        self.renderer
            .replace(Slot::LastReleased, &format_date(indicators.last_released));

        debug!(
            shown = view.products.len(),
            page = pagination.current_page,
            pages = pagination.page_count,
            "rendered view"
        );
        view
    }

    fn compose(&self, favorites: &FavoriteSet, today: chrono::NaiveDate) -> RenderedView {
        let snapshot = &self.state.snapshot;
        let controls = &self.state.controls;

        let filtered =
            FilterPipeline::from_toggles(controls.filters, self.settings, today, favorites)
                .apply(&snapshot.products);
        let products = apply_sort(&filtered, controls.sort);
        let indicators = compute_indicators(&products, today);

        RenderedView {
            products,
            indicators,
            pagination: snapshot.pagination,
            fallback: self.state.last_fallback.clone(),
        }
    }
}
