//! Favorite - a fused record persisted with a store-generated identity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::FusedRecord;
use crate::Error;

/// Identity assigned to a favorite when it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(Uuid);

impl FavoriteId {
    /// Generate a fresh random identity.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FavoriteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| Error::invalid(format!("bad favorite id '{s}': {e}")))
    }
}

/// A saved fused record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    id: FavoriteId,
    record: FusedRecord,
}

impl Favorite {
    pub(crate) const fn new(id: FavoriteId, record: FusedRecord) -> Self {
        Self { id, record }
    }

    /// Get the favorite's identity.
    #[must_use]
    pub const fn id(&self) -> FavoriteId {
        self.id
    }

    /// Get the saved fused record.
    #[must_use]
    pub const fn record(&self) -> &FusedRecord {
        &self.record
    }

    /// True if this favorite holds the same fusion (same name and timestamp).
    #[must_use]
    pub fn matches(&self, fused: &FusedRecord) -> bool {
        self.record.name() == fused.name() && self.record.created_at() == fused.created_at()
    }
}
