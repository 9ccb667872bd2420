//! Fused Record - the synthesized output of one fusion

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{Category, Move, SourceRecord, Stat, MAX_MOVES, MAX_TYPES};
use crate::{Error, Result};

/// Fused Record combines exactly three source records.
///
/// Produced only by the fusion engine. `created_at` is fixed at fusion time
/// and there is no way to change it afterwards. Deserialized records (saved
/// favorites) are checked against the same shape the engine guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FusedRecordData")]
pub struct FusedRecord {
    name: String,
    types: Vec<Category>,
    stats: Vec<Stat>,
    moves: Vec<Move>,
    source_records: [SourceRecord; 3],
    created_at: DateTime<Utc>,
}

impl FusedRecord {
    pub(crate) fn new(
        name: String,
        types: Vec<Category>,
        stats: Vec<Stat>,
        moves: Vec<Move>,
        source_records: [SourceRecord; 3],
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            types,
            stats,
            moves,
            source_records,
            created_at,
        }
    }

    /// Get the synthesized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the categories (at most 2, no duplicates).
    #[must_use]
    pub fn types(&self) -> &[Category] {
        &self.types
    }

    /// Get the averaged stats.
    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Get the value of a stat by name, if present.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// Get the merged moves (at most 4, unique by name).
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get the three source records in fusion order.
    #[must_use]
    pub const fn source_records(&self) -> &[SourceRecord; 3] {
        &self.source_records
    }

    /// Get the fusion timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Unvalidated wire form of [`FusedRecord`].
#[derive(Deserialize)]
struct FusedRecordData {
    name: String,
    types: Vec<Category>,
    stats: Vec<Stat>,
    moves: Vec<Move>,
    source_records: [SourceRecord; 3],
    created_at: DateTime<Utc>,
}

impl TryFrom<FusedRecordData> for FusedRecord {
    type Error = Error;

    fn try_from(data: FusedRecordData) -> Result<Self> {
        if data.types.len() > MAX_TYPES {
            return Err(Error::invalid(format!(
                "fused record '{}' has {} types, at most {MAX_TYPES} allowed",
                data.name,
                data.types.len()
            )));
        }
        let mut seen_types = FxHashSet::default();
        if let Some(dup) = data.types.iter().find(|t| !seen_types.insert(**t)) {
            return Err(Error::invalid(format!(
                "fused record '{}' repeats type '{dup}'",
                data.name
            )));
        }
        if data.moves.len() > MAX_MOVES {
            return Err(Error::invalid(format!(
                "fused record '{}' has {} moves, at most {MAX_MOVES} allowed",
                data.name,
                data.moves.len()
            )));
        }
        let mut seen_moves = FxHashSet::default();
        if let Some(dup) = data.moves.iter().find(|m| !seen_moves.insert(m.name.as_str())) {
            return Err(Error::invalid(format!(
                "fused record '{}' repeats move '{}'",
                data.name, dup.name
            )));
        }

        Ok(Self::new(
            data.name,
            data.types,
            data.stats,
            data.moves,
            data.source_records,
            data.created_at,
        ))
    }
}
