//! View controller errors.

use fashion_cache::CacheError;

/// Errors surfaced by the view controller.
///
/// Fetch failures never appear here; they degrade to the previous snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Failed to persist favorites: {0}")]
    Favorites(#[from] CacheError),
}
