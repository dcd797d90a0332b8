//! HTTP client for the listing API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::query::ListingQuery;
use crate::response::{BrandsResponse, ListingResponse};
use crate::retry::RetryPolicy;
use crate::source::ListingSource;
use crate::timeout::TimeoutConfig;

/// Public listing API.
pub const DEFAULT_BASE_URL: &str = "https://clear-fashion-api.vercel.app";

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("API reported an unsuccessful response")]
    Unsuccessful,

    #[error("API response carried no data")]
    MissingData,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, Default)]
pub struct FetchPolicy {
    /// Timeout configuration.
    pub timeout: TimeoutConfig,
    /// Retry policy.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    /// Create a new fetch policy.
    pub fn new(timeout: TimeoutConfig, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

/// Client for the listing API.
///
/// Applies the configured timeouts to every request and retries transient
/// failures according to the retry policy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    policy: FetchPolicy,
}

impl ApiClient {
    /// Create a client for `base_url` with the given policy.
    pub fn new(base_url: impl Into<String>, policy: FetchPolicy) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(policy.timeout.connect)
            .timeout(policy.timeout.total)
            .user_agent(concat!("fashion/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            policy,
        })
    }

    /// Create a client for the public API with the default policy.
    pub fn public() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, FetchPolicy::default())
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the product listing endpoint.
    pub fn listing_url(&self) -> String {
        self.base_url.clone()
    }

    /// URL of the brands endpoint.
    pub fn brands_url(&self) -> String {
        format!("{}/brands", self.base_url)
    }

    /// GET `url` with `query` and decode the JSON body, retrying per policy.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_json_once(url, query).await {
                Ok(value) => return Ok(value),
                Err(err) if self.policy.retry.should_retry(&err, attempt) => {
                    let delay = self.policy.retry.backoff.delay_for_attempt(attempt);
                    warn!(url, attempt, error = %err, delay_ms = delay.as_millis() as u64, "retrying request");
                    if delay > Duration::ZERO {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_json_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        debug!(url, ?query, "sending request");
        let resp = self.http.get(url).query(query).send().await?;

        let status = resp.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn list_products(&self, query: &ListingQuery) -> Result<ListingResponse, FetchError> {
        self.get_json(&self.listing_url(), &query.query_pairs()).await
    }

    async fn list_brands(&self) -> Result<BrandsResponse, FetchError> {
        self.get_json(&self.brands_url(), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = ApiClient::new("https://api.example/", FetchPolicy::default()).unwrap();
        assert_eq!(client.listing_url(), "https://api.example");
        assert_eq!(client.brands_url(), "https://api.example/brands");
    }
}
