//! Key-Value Store Module
//!
//! Byte-valued key-value backends that the favorites store persists into:
//! - [`MemoryKvStore`]: lock-free in-memory map, lost on process exit
//! - [`FileKvStore`]: a single JSON document on disk, string values only
//!
//! # Example
//!
//! ```rust,no_run
//! use fusedex::kv::{KvStore, MemoryKvStore};
//!
//! # async fn example() -> fusedex::Result<()> {
//! let store = MemoryKvStore::new();
//!
//! store.set("key", b"value".to_vec()).await?;
//! let value = store.get("key").await?;
//! assert_eq!(value, Some(b"value".to_vec()));
//!
//! store.delete("key").await?;
//! assert!(!store.exists("key").await?);
//! # Ok(())
//! # }
//! ```

mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use crate::Result;
use std::future::Future;

/// Key-value store trait used as the persistence seam for favorites.
pub trait KvStore: Send + Sync {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Set a value for a key.
    ///
    /// Overwrites any existing value.
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Delete a key.
    ///
    /// No-op if the key doesn't exist.
    fn delete(&self, key: &str) -> impl Future<Output = Result<()>> + Send;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> impl Future<Output = Result<bool>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Behaviour every backend must share.
    async fn exercise_contract<S: KvStore>(store: &S) {
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(!store.exists("missing").await.unwrap());

        store.set("key", b"value1".to_vec()).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(b"value1".to_vec()));

        store.set("key", b"value2".to_vec()).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(b"value2".to_vec()));
        assert!(store.exists("key").await.unwrap());

        store.delete("key").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), None);

        // Should not error
        store.delete("nonexistent").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_kv_contract() {
        exercise_contract(&MemoryKvStore::new()).await;
    }

    #[tokio::test]
    async fn test_file_kv_contract() {
        let dir = tempfile::tempdir().unwrap();
        exercise_contract(&FileKvStore::new(dir.path().join("store.json"))).await;
    }

    #[tokio::test]
    async fn test_memory_kv_concurrent_access() {
        use std::sync::Arc;

        let store = Arc::new(MemoryKvStore::new());
        let mut handles = vec![];

        // Spawn 100 concurrent writers
        for i in 0..100 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let key = format!("key{i}");
                let value = format!("value{i}").into_bytes();
                store.set(&key, value).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..100 {
            let key = format!("key{i}");
            let expected = format!("value{i}").into_bytes();
            assert_eq!(store.get(&key).await.unwrap(), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_memory_kv_empty_key_and_value() {
        let store = MemoryKvStore::new();

        store.set("", vec![]).await.unwrap();
        assert_eq!(store.get("").await.unwrap(), Some(vec![]));
    }
}
