//! In-memory creature provider for tests and offline use.

use dashmap::DashMap;

use super::{CreatureProvider, IdSource, RandomIds};
use crate::record::SourceRecord;
use crate::{Error, Result};

/// Serves pre-loaded creature records keyed by id.
#[derive(Debug)]
pub struct MemoryProvider<I: IdSource = RandomIds> {
    records: DashMap<u32, SourceRecord>,
    ids: I,
}

impl<I: IdSource> MemoryProvider<I> {
    /// Create an empty provider drawing random ids from `ids`.
    #[must_use]
    pub fn new(ids: I) -> Self {
        Self {
            records: DashMap::new(),
            ids,
        }
    }

    /// Create a provider pre-loaded with `records`.
    #[must_use]
    pub fn with_records(ids: I, records: impl IntoIterator<Item = SourceRecord>) -> Self {
        let provider = Self::new(ids);
        for record in records {
            provider.insert(record);
        }
        provider
    }

    /// Add or replace a record under its own id.
    pub fn insert(&self, record: SourceRecord) {
        self.records.insert(record.id(), record);
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<I: IdSource> CreatureProvider for MemoryProvider<I> {
    async fn fetch_by_id(&self, id: u32) -> Result<SourceRecord> {
        self.records
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| Error::Provider(format!("no creature with id {id}")))
    }

    async fn fetch_random(&self) -> Result<SourceRecord> {
        self.fetch_by_id(self.ids.next_id()).await
    }
}
