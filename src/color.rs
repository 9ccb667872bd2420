//! Category color palette
//!
//! Read-only mapping from each [`Category`] to a presentation color token.
//! Lookups by name never fail: unrecognized categories get [`DEFAULT_COLOR`].

use std::fmt;

use serde::Serialize;

use crate::record::Category;

/// A CSS color token, e.g. `hsl(0, 84%, 60%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken(&'static str);

impl ColorToken {
    /// The CSS value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Fallback for unrecognized categories (neutral gray).
pub const DEFAULT_COLOR: ColorToken = ColorToken("hsl(0, 0%, 50%)");

impl Category {
    /// Color token for this category.
    #[must_use]
    pub const fn color(self) -> ColorToken {
        ColorToken(match self {
            Self::Normal => "hsl(0, 0%, 50%)",
            Self::Fire => "hsl(0, 84%, 60%)",
            Self::Water => "hsl(217, 91%, 60%)",
            Self::Electric => "hsl(45, 93%, 58%)",
            Self::Grass => "hsl(142, 71%, 45%)",
            Self::Ice => "hsl(188, 78%, 70%)",
            Self::Fighting => "hsl(0, 65%, 47%)",
            Self::Poison => "hsl(280, 50%, 50%)",
            Self::Ground => "hsl(45, 60%, 55%)",
            Self::Flying => "hsl(250, 60%, 65%)",
            Self::Psychic => "hsl(330, 65%, 65%)",
            Self::Bug => "hsl(60, 50%, 45%)",
            Self::Rock => "hsl(45, 40%, 50%)",
            Self::Ghost => "hsl(270, 40%, 55%)",
            Self::Dragon => "hsl(260, 80%, 65%)",
            Self::Dark => "hsl(0, 0%, 30%)",
            Self::Steel => "hsl(210, 20%, 70%)",
            Self::Fairy => "hsl(330, 60%, 75%)",
        })
    }
}

/// Look up the color token for a category name.
///
/// The name is trimmed and lower-cased first. Unknown names return
/// [`DEFAULT_COLOR`].
#[must_use]
pub fn lookup_color(category: &str) -> ColorToken {
    Category::parse(category).map_or_else(
        || {
            tracing::warn!(category, "unknown category, using default color");
            DEFAULT_COLOR
        },
        Category::color,
    )
}
