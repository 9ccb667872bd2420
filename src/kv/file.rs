//! File-backed KV store: one pretty-printed JSON object on disk.
//!
//! Values must be UTF-8 text (the favorites store writes JSON). Every
//! mutation rewrites the whole document into a uniquely named temp file in
//! the same directory and renames it over the store, so a crash never leaves
//! a half-written store behind. All stores opened on the same path within a
//! process share one lock.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use super::KvStore;
use crate::{Error, Result};

type Document = BTreeMap<String, String>;

/// JSON-file key-value store.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    // serializes read-modify-write cycles on this path within the process
    lock: Arc<Mutex<()>>,
}

/// Lock shared by every store opened on `path`.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<DashMap<PathBuf, Arc<Mutex<()>>>> = OnceLock::new();

    let key = std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path));
    Arc::clone(&LOCKS.get_or_init(DashMap::new).entry(key).or_default())
}

/// Write `content` to a fresh temp file beside `path`, then rename it over `path`.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl FileKvStore {
    /// Open (lazily) a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = path_lock(&path);
        Self { path, lock }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Document> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Document::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::Store(format!("corrupt store file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(doc)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| Error::Store(format!("store write task failed: {e}")))?
    }
}

impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key).map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let value = String::from_utf8(value)
            .map_err(|_| Error::Store(format!("value for key '{key}' is not UTF-8")))?;

        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        doc.insert(key.to_string(), value);
        self.save(&doc).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if doc.remove(key).is_some() {
            self.save(&doc).await?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");

        FileKvStore::new(&path)
            .set("favorites", b"[]".to_vec())
            .await
            .unwrap();

        let reopened = FileKvStore::new(&path);
        assert_eq!(reopened.get("favorites").await.unwrap(), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn test_stores_on_one_path_do_not_lose_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.json");
        let first = Arc::new(FileKvStore::new(&path));
        let second = Arc::new(FileKvStore::new(&path));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = if i % 2 == 0 { Arc::clone(&first) } else { Arc::clone(&second) };
            handles.push(tokio::spawn(async move {
                store.set(&format!("key{i}"), format!("v{i}").into_bytes()).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let reopened = FileKvStore::new(&path);
        for i in 0..20 {
            assert_eq!(
                reopened.get(&format!("key{i}")).await.unwrap(),
                Some(format!("v{i}").into_bytes())
            );
        }

        // only the store itself remains, no temp files
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_non_utf8_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("s.json"));

        let err = store.set("k", vec![0xff, 0xfe]).await.unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileKvStore::new(&path).get("k").await.unwrap_err();
        assert!(err.to_string().contains("corrupt store file"));
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "").unwrap();

        assert_eq!(FileKvStore::new(&path).get("k").await.unwrap(), None);
    }
}
