//! Favorites store
//!
//! Persists saved fusions as a single JSON array under one collection key
//! of any [`KvStore`]. The key comes from configuration; there is no global
//! default baked into the store.
//!
//! ## Usage
//!
//! ```rust
//! use fusedex::favorites::FavoritesStore;
//! use fusedex::kv::MemoryKvStore;
//!
//! # async fn example(fused: fusedex::record::FusedRecord) -> fusedex::Result<()> {
//! let store = FavoritesStore::new(MemoryKvStore::new(), "favorites")?;
//!
//! let id = store.add(&fused).await?;
//! assert!(store.is_favorite(&fused).await?);
//!
//! store.remove(id).await?;
//! assert!(store.list().await?.is_empty());
//! # Ok(())
//! # }
//! ```

mod favorite;

pub use favorite::{Favorite, FavoriteId};

use tokio::sync::Mutex;

use crate::kv::KvStore;
use crate::record::FusedRecord;
use crate::{Error, Result};

/// One window of the favorites list.
///
/// Windows are cumulative: page `n` holds the first `(n + 1) * size`
/// favorites, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritePage {
    /// Favorites in the window, newest first.
    pub items: Vec<Favorite>,
    /// Total number of favorites.
    pub total: usize,
    /// True if a later page would show more.
    pub has_more: bool,
}

/// Favorites collection over a key-value backend.
#[derive(Debug)]
pub struct FavoritesStore<S: KvStore> {
    kv: S,
    key: String,
    // serializes read-modify-write of the collection document
    write_lock: Mutex<()>,
}

impl<S: KvStore> FavoritesStore<S> {
    /// Create a store keeping its collection under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `key` is empty.
    pub fn new(kv: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::Config("favorites key must not be empty".into()));
        }
        Ok(Self {
            kv,
            key,
            write_lock: Mutex::new(()),
        })
    }

    /// Collection key in the backend.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.kv
    }

    async fn load(&self) -> Result<Vec<Favorite>> {
        match self.kv.get(&self.key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| Error::Store(format!("unreadable favorites '{}': {e}", self.key))),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, favorites: &[Favorite]) -> Result<()> {
        self.kv.set(&self.key, serde_json::to_vec(favorites)?).await
    }

    /// All favorites, newest `created_at` first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or holds undecodable data.
    pub async fn list(&self) -> Result<Vec<Favorite>> {
        let mut favorites = self.load().await?;
        favorites.sort_by(|a, b| b.record().created_at().cmp(&a.record().created_at()));
        Ok(favorites)
    }

    /// Number of saved favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn len(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }

    /// True if nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Save a fused record and return its new identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn add(&self, fused: &FusedRecord) -> Result<FavoriteId> {
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.load().await?;
        let id = FavoriteId::generate();
        favorites.push(Favorite::new(id, fused.clone()));
        self.save(&favorites).await?;

        tracing::info!(%id, name = fused.name(), "saved favorite");
        Ok(id)
    }

    /// Look up one favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn get(&self, id: FavoriteId) -> Result<Option<Favorite>> {
        Ok(self.load().await?.into_iter().find(|f| f.id() == id))
    }

    /// Delete one favorite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if `id` is unknown, or a backend error.
    pub async fn remove(&self, id: FavoriteId) -> Result<()> {
        if self.remove_many(&[id]).await? == 0 {
            return Err(Error::Store(format!("favorite not found: {id}")));
        }
        Ok(())
    }

    /// Delete every listed favorite in a single write.
    ///
    /// Unknown ids are skipped. Returns how many favorites were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn remove_many(&self, ids: &[FavoriteId]) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.load().await?;
        let before = favorites.len();
        favorites.retain(|f| !ids.contains(&f.id()));
        let removed = before - favorites.len();

        if removed > 0 {
            self.save(&favorites).await?;
            tracing::info!(removed, requested = ids.len(), "removed favorites");
        }
        Ok(removed)
    }

    /// True if this exact fusion (same name and `created_at`) is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub async fn is_favorite(&self, fused: &FusedRecord) -> Result<bool> {
        Ok(self.load().await?.iter().any(|f| f.matches(fused)))
    }

    /// Cumulative page `index` of `size` favorites, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `size` is zero, or a backend error.
    pub async fn page(&self, index: usize, size: usize) -> Result<FavoritePage> {
        if size == 0 {
            return Err(Error::invalid("page size must be positive"));
        }
        let mut items = self.list().await?;
        let total = items.len();
        let shown = index.saturating_add(1).saturating_mul(size).min(total);
        items.truncate(shown);

        Ok(FavoritePage {
            items,
            total,
            has_more: shown < total,
        })
    }
}
