//! Creature id sources for random selection

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use crate::{Error, Result};

/// Highest creature id the public API serves by default.
pub const DEFAULT_MAX_ID: u32 = 1010;

/// Picks which creature id to fetch next.
pub trait IdSource: Send + Sync {
    /// Next id to fetch.
    fn next_id(&self) -> u32;
}

/// Uniformly random ids in `1..=max_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomIds {
    max_id: u32,
}

impl RandomIds {
    /// Random ids in `1..=max_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `max_id` is zero.
    pub fn new(max_id: u32) -> Result<Self> {
        if max_id == 0 {
            return Err(Error::Config("max creature id must be at least 1".into()));
        }
        Ok(Self { max_id })
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max_id(&self) -> u32 {
        self.max_id
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self {
            max_id: DEFAULT_MAX_ID,
        }
    }
}

impl IdSource for RandomIds {
    fn next_id(&self) -> u32 {
        rand::thread_rng().gen_range(1..=self.max_id)
    }
}

/// Cycles through a fixed list of ids. Deterministic.
#[derive(Debug)]
pub struct SequenceIds {
    ids: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceIds {
    /// Cycle through `ids` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `ids` is empty.
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Result<Self> {
        let ids: Vec<u32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(Error::invalid("id sequence must not be empty"));
        }
        Ok(Self {
            ids,
            cursor: AtomicUsize::new(0),
        })
    }
}

impl IdSource for SequenceIds {
    fn next_id(&self) -> u32 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.ids[i % self.ids.len()]
    }
}
