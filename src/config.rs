//! Runtime configuration
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, and `FUSEDEX_*` environment variables.
//!
//! ```toml
//! api_base_url = "https://pokeapi.co/api/v2"
//! max_creature_id = 1010
//! request_timeout_secs = 30
//! favorites_key = "favorites"
//! store_path = "fusedex-favorites.json"
//! page_size = 8
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::favorites::FavoritesStore;
use crate::kv::FileKvStore;
use crate::provider::{PokeApiProvider, RandomIds, DEFAULT_API_BASE_URL, DEFAULT_MAX_ID};
use crate::{Error, Result};

/// Environment variable overriding [`FusionConfig::api_base_url`].
pub const ENV_API_BASE_URL: &str = "FUSEDEX_API_BASE_URL";
/// Environment variable overriding [`FusionConfig::store_path`].
pub const ENV_STORE_PATH: &str = "FUSEDEX_STORE_PATH";
/// Environment variable overriding [`FusionConfig::favorites_key`].
pub const ENV_FAVORITES_KEY: &str = "FUSEDEX_FAVORITES_KEY";

/// fusedex configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FusionConfig {
    /// Creature API base URL
    pub api_base_url: String,
    /// Random ids are drawn from `1..=max_creature_id`
    pub max_creature_id: u32,
    /// Per-request HTTP timeout
    pub request_timeout_secs: u64,
    /// Collection key favorites are stored under
    pub favorites_key: String,
    /// Favorites file
    pub store_path: PathBuf,
    /// Favorites shown per page
    pub page_size: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_creature_id: DEFAULT_MAX_ID,
            request_timeout_secs: 30,
            favorites_key: "favorites".to_string(),
            store_path: PathBuf::from("fusedex-favorites.json"),
            page_size: 8,
        }
    }
}

impl FusionConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load defaults, then `path` (if given), then environment overrides,
    /// and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if it is malformed or the final values are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `FUSEDEX_*` overrides looked up through `lookup`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(path) = lookup(ENV_STORE_PATH) {
            self.store_path = PathBuf::from(path);
        }
        if let Some(key) = lookup(ENV_FAVORITES_KEY) {
            self.favorites_key = key;
        }
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the favorites file.
    #[must_use]
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the favorites collection key.
    #[must_use]
    pub fn favorites_key(mut self, key: impl Into<String>) -> Self {
        self.favorites_key = key.into();
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.max_creature_id == 0 {
            return Err(Error::Config("max_creature_id must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        if self.favorites_key.trim().is_empty() {
            return Err(Error::Config("favorites_key must not be empty".into()));
        }
        Ok(())
    }

    /// Build the HTTP provider described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the client cannot be built.
    pub fn provider(&self) -> Result<PokeApiProvider<RandomIds>> {
        self.validate()?;
        PokeApiProvider::new(
            self.api_base_url.clone(),
            self.request_timeout(),
            RandomIds::new(self.max_creature_id)?,
        )
    }

    /// Open the file-backed favorites store described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the favorites key is empty.
    pub fn favorites(&self) -> Result<FavoritesStore<FileKvStore>> {
        FavoritesStore::new(
            FileKvStore::new(self.store_path.clone()),
            self.favorites_key.clone(),
        )
    }
}
