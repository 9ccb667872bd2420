//! Fusion engine
//!
//! Combines three [`SourceRecord`]s into one [`FusedRecord`]:
//!
//! - **types**: concatenated in source order, first occurrence kept, at most 2
//! - **stats**: one per stat name of the first source, `floor(mean)` of the
//!   three values (a missing stat counts as 0)
//! - **moves**: concatenated in source order, unique by name, at most 4
//! - **name**: see [`generate_fused_name`]
//!
//! The engine is pure apart from reading its [`Clock`] for `created_at`, so it
//! can be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use fusedex::engine::{FixedClock, FusionEngine};
//! use fusedex::record::{Category, SourceRecord};
//!
//! let mon = |id, name: &str, hp| {
//!     SourceRecord::builder(id, name)
//!         .category(Category::Normal)
//!         .stat("hp", hp)
//!         .build()
//! };
//!
//! let engine = FusionEngine::with_clock(FixedClock::epoch());
//! let fused = engine.fuse(mon(1, "bulbasaur", 10)?, mon(4, "charmander", 15)?, mon(7, "squirtle", 20)?)?;
//!
//! assert_eq!(fused.stat("hp"), Some(15));
//! # Ok::<(), fusedex::Error>(())
//! ```

mod clock;
mod name;

pub use clock::{Clock, FixedClock, SystemClock};
pub use name::{generate_fused_name, split_name};

use rustc_hash::FxHashSet;

use crate::record::{Category, FusedRecord, Move, SourceRecord, Stat, MAX_MOVES, MAX_TYPES};
use crate::{Error, Result};

/// Stateless fusion engine parameterized by its time source.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine<C: Clock = SystemClock> {
    clock: C,
}

impl FusionEngine<SystemClock> {
    /// Create an engine that stamps records with the system time.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> FusionEngine<C> {
    /// Create an engine with a custom clock.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Fuse three source records, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the offending position if any
    /// source record fails validation. No partial record is produced.
    pub fn fuse(&self, a: SourceRecord, b: SourceRecord, c: SourceRecord) -> Result<FusedRecord> {
        for (position, record) in [&a, &b, &c].into_iter().enumerate() {
            record.validate().map_err(|e| match e {
                Error::InvalidInput(msg) => {
                    Error::invalid(format!("source record {}: {msg}", position + 1))
                }
                other => other,
            })?;
        }

        let created_at = self.clock.now();
        let name = generate_fused_name(a.name(), b.name(), c.name());
        let types = merge_types(&a, &b, &c);
        let stats = average_stats(&a, &b, &c);
        let moves = merge_moves(&a, &b, &c);

        tracing::debug!(
            fused = %name,
            sources = ?[a.id(), b.id(), c.id()],
            types = types.len(),
            moves = moves.len(),
            "fused creature"
        );

        Ok(FusedRecord::new(name, types, stats, moves, [a, b, c], created_at))
    }
}

/// Fuse three source records using the system clock.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any source record is malformed.
pub fn fuse(a: SourceRecord, b: SourceRecord, c: SourceRecord) -> Result<FusedRecord> {
    FusionEngine::new().fuse(a, b, c)
}

fn merge_types(a: &SourceRecord, b: &SourceRecord, c: &SourceRecord) -> Vec<Category> {
    let mut seen = FxHashSet::default();
    a.types()
        .iter()
        .chain(b.types())
        .chain(c.types())
        .copied()
        .filter(|category| seen.insert(*category))
        .take(MAX_TYPES)
        .collect()
}

fn average_stats(a: &SourceRecord, b: &SourceRecord, c: &SourceRecord) -> Vec<Stat> {
    let mut seen = FxHashSet::default();
    a.stats()
        .iter()
        .filter(|stat| seen.insert(stat.name.as_str()))
        .map(|stat| {
            let total = u64::from(stat.value)
                + u64::from(b.stat(&stat.name).unwrap_or(0))
                + u64::from(c.stat(&stat.name).unwrap_or(0));
            // mean of three u32 values always fits back into u32
            let value = u32::try_from(total / 3).unwrap_or(u32::MAX);
            Stat::new(stat.name.clone(), value)
        })
        .collect()
}

fn merge_moves(a: &SourceRecord, b: &SourceRecord, c: &SourceRecord) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    a.moves()
        .iter()
        .chain(b.moves())
        .chain(c.moves())
        .filter(|mv| seen.insert(mv.name.as_str()))
        .take(MAX_MOVES)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, types: &[Category], stats: &[(&str, u32)]) -> SourceRecord {
        SourceRecord::builder(id, name)
            .types(types.iter().copied())
            .stats(stats.iter().map(|(n, v)| Stat::new(*n, *v)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_stat_uses_first_source_order_and_floor() {
        let a = record(1, "aaaa", &[Category::Fire], &[("speed", 1), ("hp", 10)]);
        let b = record(2, "bbbb", &[Category::Fire], &[("hp", 11), ("speed", 1)]);
        let c = record(3, "cccc", &[Category::Fire], &[("hp", 11)]);

        let stats = average_stats(&a, &b, &c);

        assert_eq!(stats[0], Stat::new("speed", 0)); // (1 + 1 + 0) / 3
        assert_eq!(stats[1], Stat::new("hp", 10)); // 32 / 3
    }

    #[test]
    fn test_duplicate_stat_names_in_first_source_collapse() {
        let a = record(1, "aaaa", &[Category::Fire], &[("hp", 3), ("hp", 99)]);
        let b = record(2, "bbbb", &[Category::Fire], &[("hp", 3)]);
        let c = record(3, "cccc", &[Category::Fire], &[("hp", 3)]);

        assert_eq!(average_stats(&a, &b, &c), vec![Stat::new("hp", 3)]);
    }

    #[test]
    fn test_large_stat_values_do_not_overflow() {
        let a = record(1, "aaaa", &[Category::Fire], &[("hp", u32::MAX)]);
        let b = record(2, "bbbb", &[Category::Fire], &[("hp", u32::MAX)]);
        let c = record(3, "cccc", &[Category::Fire], &[("hp", u32::MAX)]);

        assert_eq!(average_stats(&a, &b, &c)[0].value, u32::MAX);
    }

    #[test]
    fn test_types_first_seen_then_truncated() {
        let a = record(1, "aaaa", &[Category::Grass], &[("hp", 1)]);
        let b = record(2, "bbbb", &[Category::Grass, Category::Poison], &[("hp", 1)]);
        let c = record(3, "cccc", &[Category::Fire], &[("hp", 1)]);

        assert_eq!(merge_types(&a, &b, &c), vec![Category::Grass, Category::Poison]);
    }

    #[test]
    fn test_fuse_propagates_position_in_error() {
        let good = record(1, "aaaa", &[Category::Grass], &[("hp", 1)]);
        let bad = SourceRecord::unchecked(2, "bbbb", vec![Category::Water], Vec::new());

        let err = fuse(good.clone(), bad, good).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("source record 2"));
        assert!(err.to_string().contains("has no stats"));
    }

    #[test]
    fn test_fuse_same_record_three_times() {
        let mon = record(1, "aaaa", &[Category::Grass], &[("hp", 7)]);

        let fused = fuse(mon.clone(), mon.clone(), mon).unwrap();

        assert_eq!(fused.name(), "Aaaaaa");
        assert_eq!(fused.types(), &[Category::Grass]);
        assert_eq!(fused.stat("hp"), Some(7));
    }
}
