//! Response envelopes of the listing API.

use fashion_catalog::Snapshot;
use serde::{Deserialize, Serialize};

use crate::client::FetchError;

/// The `{success, data}` envelope wrapping every API payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the API considers the request successful.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }

    /// Create an unsuccessful response.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }

    /// Unwrap the payload, treating `success != true` as an error.
    pub fn into_data(self) -> Result<T, FetchError> {
        if !self.success {
            return Err(FetchError::Unsuccessful);
        }
        self.data.ok_or(FetchError::MissingData)
    }
}

/// Payload of the product listing endpoint.
pub type ListingResponse = ApiResponse<Snapshot>;

/// Payload of the brands endpoint.
///
/// Accepts both `{"result": [...]}` and a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BrandList {
    Wrapped { result: Vec<String> },
    Bare(Vec<String>),
}

impl BrandList {
    /// Brand names in API order.
    pub fn into_names(self) -> Vec<String> {
        match self {
            BrandList::Wrapped { result } => result,
            BrandList::Bare(names) => names,
        }
    }
}

/// Payload of the brands endpoint.
pub type BrandsResponse = ApiResponse<BrandList>;
