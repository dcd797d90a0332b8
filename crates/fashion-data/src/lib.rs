//! Data access for the listing API.
//!
//! This crate provides:
//! - `ListingQuery` - Page, size and optional brand
//! - `ApiClient` - reqwest client with timeouts and retries
//! - `ListingSource` - Seam between the fetcher and the transport
//! - `ProductFetcher` - Last-known-good fallback on any failure

mod client;
mod fetcher;
mod query;
mod response;
mod retry;
mod source;
mod timeout;

pub use client::*;
pub use fetcher::*;
pub use query::*;
pub use response::*;
pub use retry::*;
pub use source::*;
pub use timeout::*;
