//! Product type as served by the listing API.

use crate::error::CatalogError;
use crate::ids::ProductId;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A product in the catalogue.
///
/// Products are immutable once fetched. The release date is kept in its wire
/// form and parsed on demand, so an unparseable date never rejects the whole
/// page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "uuid")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Price (non-negative).
    pub price: f64,
    /// Release date as sent by the API (`YYYY-MM-DD`).
    pub released: String,
    /// External link to the brand's product page.
    pub link: String,
    /// Product photo URL, when the brand exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        released: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price,
            released: released.into(),
            link: link.into(),
            photo: None,
        }
    }

    /// Parsed release date, `None` when the wire value is not a date.
    pub fn released_on(&self) -> Option<NaiveDate> {
        parse_release_date(&self.released).ok()
    }
}

/// Parse a release date.
///
/// Accepts a plain calendar date or a full RFC 3339 timestamp, in which case
/// only the date part is kept.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, CatalogError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| CatalogError::InvalidReleaseDate(raw.to_string()))
}
