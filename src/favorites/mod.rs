//! Client-local favorites and the key-value stores they persist to.
//!
//! Favorites are stored under a single key as a JSON array of recipe ids,
//! e.g. `[1,3]`. A value that is not a JSON array restores as an empty set;
//! array elements that are not valid ids are skipped.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Default storage key for the favorites list.
pub const FAVORITES_KEY: &str = "recipeFavorites";

/// Set of favorite recipe ids, kept in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: Vec<u32>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Adds `id`; returns `false` if it was already present.
    pub fn insert(&mut self, id: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`; returns `false` if it was not present.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&existing| existing != id);
        self.ids.len() != before
    }

    /// Flips membership of `id` and returns the new membership.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Parses a persisted JSON array. Duplicates keep their first position;
    /// elements that are not valid ids (negative, fractional, strings) are
    /// skipped. Anything other than an array is an error.
    pub fn from_json(value: &str) -> Result<Self, serde_json::Error> {
        let values: Vec<serde_json::Value> = serde_json::from_str(value)?;
        let total = values.len();
        let favorites: FavoriteSet = values
            .iter()
            .filter_map(|v| v.as_u64())
            .filter_map(|id| u32::try_from(id).ok())
            .collect();
        if favorites.len() < total {
            tracing::debug!(
                "Skipped {} invalid or duplicate favorite ids",
                total - favorites.len()
            );
        }
        Ok(favorites)
    }

    pub fn to_json(&self) -> String {
        // A Vec<u32> always serializes
        serde_json::to_string(&self.ids).unwrap_or_else(|_| String::from("[]"))
    }

    /// Restores favorites from `store`, falling back to an empty set when
    /// the key is absent or its value is malformed.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let Some(value) = store.get(key) else {
            return Self::default();
        };
        match Self::from_json(&value) {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::warn!("Ignoring malformed favorites under {:?}: {}", key, e);
                Self::default()
            }
        }
    }

    /// Writes the full set to `store` under `key`.
    pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
        store.set(key, self.to_json())
    }
}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
