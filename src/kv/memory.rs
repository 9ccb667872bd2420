//! Process-local favorites backend.
//!
//! Nothing survives a restart. Useful for tests and for seeding a
//! [`FavoritesStore`](crate::favorites::FavoritesStore) with a known document.

use dashmap::DashMap;

use super::KvStore;
use crate::Result;

/// `DashMap`-backed key-value store.
///
/// ```rust
/// use fusedex::kv::{KvStore, MemoryKvStore};
///
/// # async fn example() -> fusedex::Result<()> {
/// let kv = MemoryKvStore::with_entries([("favorites", b"[]".to_vec())]);
/// assert!(kv.exists("favorites").await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`; later duplicates overwrite earlier ones.
    #[must_use]
    pub fn with_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Vec<u8>)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}
