//! Category - the 18 elemental classifications of creatures and moves

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Elemental category attached to creatures and moves.
///
/// Serialized in lower case (`"fire"`, `"water"`, ...), matching the
/// identifiers used by PokeAPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Normal (also the fallback for unknown move categories)
    #[default]
    Normal,
    /// Fire
    Fire,
    /// Water
    Water,
    /// Electric
    Electric,
    /// Grass
    Grass,
    /// Ice
    Ice,
    /// Fighting
    Fighting,
    /// Poison
    Poison,
    /// Ground
    Ground,
    /// Flying
    Flying,
    /// Psychic
    Psychic,
    /// Bug
    Bug,
    /// Rock
    Rock,
    /// Ghost
    Ghost,
    /// Dragon
    Dragon,
    /// Dark
    Dark,
    /// Steel
    Steel,
    /// Fairy
    Fairy,
}

impl Category {
    /// Every known category, in canonical order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Parse a category name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the 18 known categories.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    /// Parse a category name, substituting [`Category::Normal`] when unknown.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid(format!("unknown category '{s}'")))
    }
}
