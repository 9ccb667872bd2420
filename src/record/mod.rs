//! Creature data model
//!
//! ```text
//! SourceRecord (3) ──> fuse ──> FusedRecord (1)
//!     ├── types: Category (1-2)        ├── types (<=2, first-seen)
//!     ├── stats: Stat (N)              ├── stats (floor of mean)
//!     └── moves: Move (0-4)            └── moves (<=4, unique by name)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fusedex::record::{Category, SourceRecord};
//!
//! let bulbasaur = SourceRecord::builder(1, "bulbasaur")
//!     .category(Category::Grass)
//!     .category(Category::Poison)
//!     .stat("hp", 45)
//!     .move_entry("vine-whip", Category::Grass)
//!     .build()?;
//!
//! assert_eq!(bulbasaur.stat("hp"), Some(45));
//! # Ok::<(), fusedex::Error>(())
//! ```

mod category;
mod fused_record;
mod source_record;
mod stat;

pub use category::Category;
pub use fused_record::FusedRecord;
pub use source_record::{SourceRecord, SourceRecordBuilder, MAX_MOVES, MAX_TYPES};
pub use stat::{is_normalized_stat_name, normalize_stat_name, Move, Stat};
