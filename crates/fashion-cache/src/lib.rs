//! Key-value persistence for the Clear Fashion client.
//!
//! Provides the [`KeyValueStore`] seam (in-memory and file-backed
//! implementations) and the [`FavoritesStore`] built on top of it.
//!
//! # Example
//!
//! ```rust
//! use fashion_cache::{FavoritesStore, MemoryStore};
//! use fashion_catalog::ProductId;
//!
//! let favorites = FavoritesStore::new(MemoryStore::new());
//! let id = ProductId::new("a1b2");
//!
//! assert!(favorites.toggle(&id).unwrap());
//! assert!(favorites.is_favorite(&id));
//! assert!(!favorites.toggle(&id).unwrap());
//! ```

mod error;
mod favorites;
mod kv;

pub use error::CacheError;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, FavoritesStore, FileStore, KeyValueStore, MemoryStore};
}
