//! Creature data providers
//!
//! A provider turns a numeric creature id into a validated [`SourceRecord`].
//! Which ids are "random" is decided by an injectable [`IdSource`], so the
//! whole fetch-then-fuse path can run deterministically in tests.
//!
//! ```text
//! IdSource ──> CreatureProvider::fetch_by_id ──> SourceRecord
//!                  ├── PokeApiProvider (HTTP)
//!                  └── MemoryProvider (fixtures)
//! ```

mod ids;
mod memory;
mod pokeapi;

pub use ids::{IdSource, RandomIds, SequenceIds, DEFAULT_MAX_ID};
pub use memory::MemoryProvider;
pub use pokeapi::{PokeApiProvider, DEFAULT_API_BASE_URL};

use std::future::Future;

use crate::record::SourceRecord;
use crate::Result;

/// Source of creature records.
pub trait CreatureProvider: Send + Sync {
    /// Fetch one creature by id.
    fn fetch_by_id(&self, id: u32) -> impl Future<Output = Result<SourceRecord>> + Send;

    /// Fetch one creature chosen by the provider's id source.
    fn fetch_random(&self) -> impl Future<Output = Result<SourceRecord>> + Send;

    /// Fetch three creatures by id, concurrently.
    ///
    /// If any fetch fails the other results are discarded and the first
    /// error is returned, so callers never see a partial set.
    fn fetch_three(&self, ids: [u32; 3]) -> impl Future<Output = Result<[SourceRecord; 3]>> + Send {
        async move {
            let (a, b, c) = tokio::try_join!(
                self.fetch_by_id(ids[0]),
                self.fetch_by_id(ids[1]),
                self.fetch_by_id(ids[2])
            )?;
            Ok([a, b, c])
        }
    }

    /// Fetch three random creatures, concurrently, all-or-nothing.
    fn fetch_three_random(&self) -> impl Future<Output = Result<[SourceRecord; 3]>> + Send {
        async move {
            let (a, b, c) =
                tokio::try_join!(self.fetch_random(), self.fetch_random(), self.fetch_random())?;
            Ok([a, b, c])
        }
    }
}
