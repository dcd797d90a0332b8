//! Product catalogue module.
//!
//! Contains the product type and the favorite set.

mod favorites;
mod product;

pub use favorites::FavoriteSet;
pub use product::{parse_release_date, Product};
