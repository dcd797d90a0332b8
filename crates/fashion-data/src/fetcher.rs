//! Product fetcher with last-known-good fallback.

use fashion_catalog::Snapshot;
use tracing::{error, info, warn};

use crate::query::ListingQuery;
use crate::source::ListingSource;

/// Result of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The API answered with a new page.
    Fresh(Snapshot),
    /// The fetch failed; carries the previous snapshot unchanged.
    Fallback {
        /// Last known good snapshot.
        snapshot: Snapshot,
        /// Why the fetch failed.
        reason: String,
    },
}

impl FetchOutcome {
    /// Check if the fetch fell back to the previous snapshot.
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    /// Borrow the snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            FetchOutcome::Fresh(snapshot) => snapshot,
            FetchOutcome::Fallback { snapshot, .. } => snapshot,
        }
    }

    /// Take the snapshot, fresh or fallback.
    pub fn into_snapshot(self) -> Snapshot {
        match self {
            FetchOutcome::Fresh(snapshot) => snapshot,
            FetchOutcome::Fallback { snapshot, .. } => snapshot,
        }
    }
}

/// Fetches product pages and never fails the caller.
///
/// Network errors, undecodable bodies and `success: false` answers are logged
/// and turned into [`FetchOutcome::Fallback`]. The fetcher holds no state of
/// its own; the caller decides whether to adopt the result.
pub struct ProductFetcher<S: ListingSource> {
    source: S,
}

impl<S: ListingSource> ProductFetcher<S> {
    /// Create a fetcher over a listing source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a page, falling back to `previous` on any failure.
    pub async fn fetch(&self, query: &ListingQuery, previous: &Snapshot) -> FetchOutcome {
        let result = match self.source.list_products(query).await {
            Ok(response) => response.into_data(),
            Err(err) => Err(err),
        };

        match result {
            Ok(snapshot) => {
                info!(
                    page = query.page,
                    size = query.size,
                    brand = query.brand.as_deref().unwrap_or(""),
                    products = snapshot.products.len(),
                    "fetched products"
                );
                FetchOutcome::Fresh(snapshot)
            }
            Err(err) => {
                error!(
                    page = query.page,
                    size = query.size,
                    brand = query.brand.as_deref().unwrap_or(""),
                    error = %err,
                    "fetch failed, keeping previous snapshot"
                );
                FetchOutcome::Fallback {
                    snapshot: previous.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Fetch brand names; failures yield an empty list.
    pub async fn brands(&self) -> Vec<String> {
        let result = match self.source.list_brands().await {
            Ok(response) => response.into_data(),
            Err(err) => Err(err),
        };

        match result {
            Ok(list) => list.into_names(),
            Err(err) => {
                warn!(error = %err, "brand listing unavailable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use crate::response::{ApiResponse, BrandList, BrandsResponse, ListingResponse};
    use async_trait::async_trait;
    use fashion_catalog::{catalog::Product, search::PaginationMeta};
    use std::sync::Mutex;

    enum Reply {
        Page(Snapshot),
        Unsuccessful,
        Broken,
    }

    struct StubSource {
        reply: Reply,
        seen: Mutex<Vec<ListingQuery>>,
    }

    impl StubSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ListingSource for StubSource {
        async fn list_products(&self, query: &ListingQuery) -> Result<ListingResponse, FetchError> {
            self.seen.lock().unwrap().push(query.clone());
            match &self.reply {
                Reply::Page(snapshot) => Ok(ApiResponse::ok(snapshot.clone())),
                Reply::Unsuccessful => Ok(ApiResponse::failed()),
                Reply::Broken => Err(FetchError::Connection("connection refused".into())),
            }
        }

        async fn list_brands(&self) -> Result<BrandsResponse, FetchError> {
            match &self.reply {
                Reply::Page(_) => Ok(ApiResponse::ok(BrandList::Bare(vec!["loom".into()]))),
                Reply::Unsuccessful => Ok(ApiResponse::failed()),
                Reply::Broken => Err(FetchError::Timeout("5s".into())),
            }
        }
    }

    fn previous() -> Snapshot {
        Snapshot::new(
            vec![Product::new("old", "Old tee", "loom", 20.0, "2023-01-01", "https://loom.example")],
            PaginationMeta::new(2, 5, 60),
        )
    }

    #[tokio::test]
    async fn test_fresh_page_is_returned() {
        let page = Snapshot::new(
            vec![Product::new("new", "New tee", "loom", 25.0, "2024-05-01", "https://loom.example")],
            PaginationMeta::new(1, 5, 60),
        );
        let fetcher = ProductFetcher::new(StubSource::new(Reply::Page(page.clone())));

        let outcome = fetcher.fetch(&ListingQuery::default(), &previous()).await;
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_snapshot(), page);
    }

    #[tokio::test]
    async fn test_unsuccessful_answer_keeps_previous_snapshot() {
        let fetcher = ProductFetcher::new(StubSource::new(Reply::Unsuccessful));

        let outcome = fetcher.fetch(&ListingQuery::default(), &previous()).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.snapshot(), &previous());
    }

    #[tokio::test]
    async fn test_transport_error_keeps_previous_snapshot() {
        let fetcher = ProductFetcher::new(StubSource::new(Reply::Broken));

        let outcome = fetcher.fetch(&ListingQuery::new(3, 6), &previous()).await;
        match outcome {
            FetchOutcome::Fallback { snapshot, reason } => {
                assert_eq!(snapshot, previous());
                assert!(reason.contains("connection refused"));
            }
            FetchOutcome::Fresh(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn test_query_is_forwarded() {
        let fetcher = ProductFetcher::new(StubSource::new(Reply::Unsuccessful));
        let query = ListingQuery::new(4, 24).with_brand(Some("dedicated"));

        fetcher.fetch(&query, &Snapshot::empty()).await;
        assert_eq!(fetcher.source().seen.lock().unwrap().as_slice(), &[query]);
    }

    #[tokio::test]
    async fn test_brands_degrade_to_empty() {
        let ok = ProductFetcher::new(StubSource::new(Reply::Page(Snapshot::empty())));
        assert_eq!(ok.brands().await, vec!["loom".to_string()]);

        let broken = ProductFetcher::new(StubSource::new(Reply::Broken));
        assert!(broken.brands().await.is_empty());
    }
}
