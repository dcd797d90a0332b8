//! Favorite product set.

use crate::error::CatalogError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Set of favorited product identifiers.
///
/// Serialized as a plain JSON array in insertion order. The order carries no
/// meaning; it only mirrors how the set was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON array form.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let ids: Vec<ProductId> = serde_json::from_str(raw)?;
        Ok(ids.into_iter().collect())
    }

    /// Encode as a JSON array.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(&self.ids)?)
    }

    /// Check membership.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`.
    ///
    /// Returns `true` when the product is now a favorite.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    /// Iterate identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut set = FavoriteSet::new();
        let id = ProductId::new("p-1");

        assert!(set.toggle(&id));
        assert!(set.contains(&id));
        assert!(!set.toggle(&id));
        assert!(!set.contains(&id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_json_keeps_insertion_order() {
        let mut set = FavoriteSet::new();
        set.toggle(&ProductId::new("b"));
        set.toggle(&ProductId::new("a"));
        assert_eq!(set.to_json().unwrap(), r#"["b","a"]"#);
    }

    #[test]
    fn test_from_json_drops_duplicates() {
        let set = FavoriteSet::from_json(r#"["a","b","a"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FavoriteSet::from_json("{not json").is_err());
        assert!(FavoriteSet::from_json(r#"{"a":1}"#).is_err());
    }
}
