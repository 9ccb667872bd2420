//! Source Record - one base creature used as fusion input

use serde::{Deserialize, Serialize};

use super::stat::is_normalized_stat_name;
use super::{Category, Move, Stat};
use crate::{Error, Result};

/// Maximum number of categories a creature carries.
pub const MAX_TYPES: usize = 2;

/// Maximum number of moves kept per creature.
pub const MAX_MOVES: usize = 4;

/// Source Record is a validated creature entry.
///
/// Instances can only be obtained through [`SourceRecordBuilder::build`] or
/// deserialization, both of which enforce the record shape: a non-empty
/// name, one or two categories, at least one stat with normalized names,
/// and at most four moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SourceRecordData")]
pub struct SourceRecord {
    id: u32,
    name: String,
    types: Vec<Category>,
    stats: Vec<Stat>,
    moves: Vec<Move>,
    sprite_url: String,
}

impl SourceRecord {
    /// Create a builder for a source record.
    #[must_use]
    pub fn builder(id: u32, name: impl Into<String>) -> SourceRecordBuilder {
        SourceRecordBuilder::new(id, name)
    }

    /// Get the creature id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the creature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the categories (1 or 2, in order).
    #[must_use]
    pub fn types(&self) -> &[Category] {
        &self.types
    }

    /// Get the base stats, in provider order.
    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Get the value of a stat by name, if present.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// Get the moves (0 to 4).
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get the sprite URL (may be empty when the provider has none).
    #[must_use]
    pub fn sprite_url(&self) -> &str {
        &self.sprite_url
    }

    /// Construct without validation, for exercising the engine's own checks.
    #[cfg(test)]
    pub(crate) fn unchecked(id: u32, name: &str, types: Vec<Category>, stats: Vec<Stat>) -> Self {
        Self {
            id,
            name: name.to_string(),
            types,
            stats,
            moves: Vec::new(),
            sprite_url: String::new(),
        }
    }

    /// Check the record shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid(format!("creature {} has no name", self.id)));
        }
        if self.types.is_empty() || self.types.len() > MAX_TYPES {
            return Err(Error::invalid(format!(
                "creature '{}' must have 1 to {MAX_TYPES} types, found {}",
                self.name,
                self.types.len()
            )));
        }
        if self.stats.is_empty() {
            return Err(Error::invalid(format!(
                "creature '{}' has no stats",
                self.name
            )));
        }
        if let Some(bad) = self.stats.iter().find(|s| !is_normalized_stat_name(&s.name)) {
            return Err(Error::invalid(format!(
                "creature '{}' has malformed stat name '{}'",
                self.name, bad.name
            )));
        }
        if self.moves.len() > MAX_MOVES {
            return Err(Error::invalid(format!(
                "creature '{}' has {} moves, at most {MAX_MOVES} allowed",
                self.name,
                self.moves.len()
            )));
        }
        Ok(())
    }
}

/// Unvalidated wire form of [`SourceRecord`].
#[derive(Deserialize)]
struct SourceRecordData {
    id: u32,
    name: String,
    types: Vec<Category>,
    stats: Vec<Stat>,
    #[serde(default)]
    moves: Vec<Move>,
    #[serde(default)]
    sprite_url: String,
}

impl TryFrom<SourceRecordData> for SourceRecord {
    type Error = Error;

    fn try_from(data: SourceRecordData) -> Result<Self> {
        let record = Self {
            id: data.id,
            name: data.name,
            types: data.types,
            stats: data.stats,
            moves: data.moves,
            sprite_url: data.sprite_url,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Builder for `SourceRecord`.
#[derive(Debug)]
pub struct SourceRecordBuilder {
    id: u32,
    name: String,
    types: Vec<Category>,
    stats: Vec<Stat>,
    moves: Vec<Move>,
    sprite_url: String,
}

impl SourceRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: Vec::new(),
            stats: Vec::new(),
            moves: Vec::new(),
            sprite_url: String::new(),
        }
    }

    /// Append a category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.types.push(category);
        self
    }

    /// Replace the categories.
    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = Category>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Append a stat.
    #[must_use]
    pub fn stat(mut self, name: impl Into<String>, value: u32) -> Self {
        self.stats.push(Stat::new(name, value));
        self
    }

    /// Replace the stats.
    #[must_use]
    pub fn stats(mut self, stats: impl IntoIterator<Item = Stat>) -> Self {
        self.stats = stats.into_iter().collect();
        self
    }

    /// Append a move.
    #[must_use]
    pub fn move_entry(mut self, name: impl Into<String>, category: Category) -> Self {
        self.moves.push(Move::new(name, category));
        self
    }

    /// Replace the moves.
    #[must_use]
    pub fn moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves = moves.into_iter().collect();
        self
    }

    /// Set the sprite URL.
    #[must_use]
    pub fn sprite_url(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = url.into();
        self
    }

    /// Build and validate the `SourceRecord`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the record shape is invalid.
    pub fn build(self) -> Result<SourceRecord> {
        let record = SourceRecord {
            id: self.id,
            name: self.name,
            types: self.types,
            stats: self.stats,
            moves: self.moves,
            sprite_url: self.sprite_url,
        };
        record.validate()?;
        Ok(record)
    }
}
