//! Persisted favorite products.

use fashion_catalog::catalog::FavoriteSet;
use fashion_catalog::ProductId;
use tracing::{debug, warn};

use crate::kv::KeyValueStore;
use crate::CacheError;

/// Key under which the favorite identifiers are stored.
pub const FAVORITES_KEY: &str = "favoriteProducts";

/// Favorite product identifiers kept in a key-value store.
///
/// The set lives under a single key as a JSON array. Every operation reads
/// the whole array and every mutation writes it back; nothing is cached
/// between calls, so changes made through another handle are always seen.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create a favorites store under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Create a favorites store under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current favorite set.
    ///
    /// A missing key, unreadable JSON or a failing store all read as the
    /// empty set.
    pub fn list_favorites(&self) -> FavoriteSet {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "favorites unreadable, using empty set");
                return FavoriteSet::new();
            }
        };

        FavoriteSet::from_json(&raw).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "malformed favorites, using empty set");
            FavoriteSet::new()
        })
    }

    /// Check whether `id` is a favorite.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.list_favorites().contains(id)
    }

    /// Flip the favorite state of `id` and persist the result.
    ///
    /// Returns `true` when the product is now a favorite.
    pub fn toggle(&self, id: &ProductId) -> Result<bool, CacheError> {
        let mut favorites = self.list_favorites();
        let now_favorite = favorites.toggle(id);
        self.store.set(&self.key, &favorites.to_json()?)?;
        debug!(id = %id, favorite = now_favorite, total = favorites.len(), "toggled favorite");
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileStore, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_toggle_twice_returns_to_original_state() {
        let favorites = FavoritesStore::new(MemoryStore::new());
        let id = ProductId::new("u-1");

        assert!(!favorites.is_favorite(&id));
        assert!(favorites.toggle(&id).unwrap());
        assert!(favorites.is_favorite(&id));
        assert!(!favorites.toggle(&id).unwrap());
        assert!(!favorites.is_favorite(&id));
    }

    #[test]
    fn test_persisted_as_json_array_in_insertion_order() {
        let store = Arc::new(MemoryStore::new());
        let favorites = FavoritesStore::new(Arc::clone(&store));

        favorites.toggle(&ProductId::new("b")).unwrap();
        favorites.toggle(&ProductId::new("a")).unwrap();

        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["b","a"]"#));
    }

    #[test]
    fn test_malformed_data_reads_as_empty() {
        for raw in ["not json", "null", r#"{"a":true}"#, "42"] {
            let favorites = FavoritesStore::new(MemoryStore::with_entry(FAVORITES_KEY, raw));
            assert!(favorites.list_favorites().is_empty(), "raw value {raw:?}");
        }
    }

    #[test]
    fn test_toggle_overwrites_malformed_data() {
        let favorites = FavoritesStore::new(MemoryStore::with_entry(FAVORITES_KEY, "oops"));
        assert!(favorites.toggle(&ProductId::new("x")).unwrap());
        assert_eq!(favorites.list_favorites().len(), 1);
    }

    #[test]
    fn test_reads_are_not_cached() {
        let store = Arc::new(MemoryStore::new());
        let first = FavoritesStore::new(Arc::clone(&store));
        let second = FavoritesStore::new(Arc::clone(&store));

        first.toggle(&ProductId::new("shared")).unwrap();
        assert!(second.is_favorite(&ProductId::new("shared")));
    }

    #[test]
    fn test_file_backed_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let favorites = FavoritesStore::new(FileStore::open(&path).unwrap());
        favorites.toggle(&ProductId::new("keep")).unwrap();

        let reopened = FavoritesStore::new(FileStore::open(&path).unwrap());
        assert!(reopened.is_favorite(&ProductId::new("keep")));
    }
}
