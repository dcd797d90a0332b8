//! Listing source abstraction.

use async_trait::async_trait;

use crate::client::FetchError;
use crate::query::ListingQuery;
use crate::response::{BrandsResponse, ListingResponse};

/// Something that can answer listing queries.
///
/// [`ApiClient`](crate::ApiClient) talks to the remote API; tests and offline
/// tools provide their own implementations.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of products.
    async fn list_products(&self, query: &ListingQuery) -> Result<ListingResponse, FetchError>;

    /// Fetch the available brand names.
    async fn list_brands(&self) -> Result<BrandsResponse, FetchError>;
}

#[async_trait]
impl<S: ListingSource + ?Sized> ListingSource for std::sync::Arc<S> {
    async fn list_products(&self, query: &ListingQuery) -> Result<ListingResponse, FetchError> {
        (**self).list_products(query).await
    }

    async fn list_brands(&self) -> Result<BrandsResponse, FetchError> {
        (**self).list_brands().await
    }
}
