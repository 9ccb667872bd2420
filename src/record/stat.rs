//! Stat and Move - the per-creature attribute records

use serde::{Deserialize, Serialize};

use super::Category;

/// A named base stat, e.g. `special_attack = 65`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stat {
    /// Normalized stat name (lower case, words joined by `_`)
    pub name: String,
    /// Base value
    pub value: u32,
}

impl Stat {
    /// Create a stat. The name is stored as given; see [`normalize_stat_name`].
    #[must_use]
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A move a creature knows, tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Move name (PokeAPI slug, e.g. `vine-whip`)
    pub name: String,
    /// Move category
    #[serde(rename = "type")]
    pub category: Category,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Normalize a raw stat name: trim, lower-case, and join words with `_`.
///
/// `"Special-Attack"` and `"special attack"` both become `"special_attack"`.
#[must_use]
pub fn normalize_stat_name(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// True if `name` is non-empty and already in normalized form.
#[must_use]
pub fn is_normalized_stat_name(name: &str) -> bool {
    !name.is_empty() && normalize_stat_name(name) == name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stat_name() {
        assert_eq!(normalize_stat_name("special-attack"), "special_attack");
        assert_eq!(normalize_stat_name(" Special  Defense "), "special_defense");
        assert_eq!(normalize_stat_name("hp"), "hp");
        assert_eq!(normalize_stat_name("--"), "");
    }

    #[test]
    fn test_is_normalized_stat_name() {
        assert!(is_normalized_stat_name("speed"));
        assert!(is_normalized_stat_name("special_attack"));
        assert!(!is_normalized_stat_name("special-attack"));
        assert!(!is_normalized_stat_name("HP"));
        assert!(!is_normalized_stat_name(""));
    }

    #[test]
    fn test_move_serializes_category_as_type() {
        let mv = Move::new("ember", Category::Fire);
        let json = serde_json::to_value(&mv).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "ember", "type": "fire" }));
    }
}
