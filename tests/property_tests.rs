//! Property-based tests for the fusion engine
//!
//! - Test cardinality and uniqueness invariants of fused records
//! - Test determinism under a fixed clock
//! - Run with ProptestConfig::with_cases(100)

use fusedex::engine::{generate_fused_name, FixedClock, FusionEngine};
use fusedex::record::{Category, Move, SourceRecord, Stat};
use fusedex::{lookup_color, DEFAULT_COLOR};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special_attack",
    "special_defense",
    "speed",
];

fn arb_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

/// Small move-name pool so duplicates across sources are common
fn arb_move() -> impl Strategy<Value = Move> {
    ("[a-f]{1,2}", arb_category()).prop_map(|(name, category)| Move::new(name, category))
}

fn arb_stats() -> impl Strategy<Value = Vec<Stat>> {
    proptest::sample::subsequence(STAT_NAMES.to_vec(), 1..=STAT_NAMES.len()).prop_flat_map(|names| {
        proptest::collection::vec(0u32..=255, names.len()).prop_map(move |values| {
            names
                .iter()
                .zip(values)
                .map(|(name, value)| Stat::new(*name, value))
                .collect()
        })
    })
}

/// Generate a valid source record
fn arb_source() -> impl Strategy<Value = SourceRecord> {
    (
        1u32..=1010,
        "[a-z]{1,12}",
        proptest::collection::vec(arb_category(), 1..=2),
        arb_stats(),
        proptest::collection::vec(arb_move(), 0..=4),
    )
        .prop_map(|(id, name, types, stats, moves)| {
            SourceRecord::builder(id, name)
                .types(types)
                .stats(stats)
                .moves(moves)
                .build()
                .unwrap()
        })
}

fn engine() -> FusionEngine<FixedClock> {
    FusionEngine::with_clock(FixedClock::epoch())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: at most 2 types, no duplicates, all drawn from the sources
    #[test]
    fn prop_types_bounded_and_unique(a in arb_source(), b in arb_source(), c in arb_source()) {
        let pool: HashSet<Category> = a.types().iter().chain(b.types()).chain(c.types()).copied().collect();
        let fused = engine().fuse(a, b, c).unwrap();

        prop_assert!(fused.types().len() <= 2);
        prop_assert!(!fused.types().is_empty());
        let unique: HashSet<_> = fused.types().iter().collect();
        prop_assert_eq!(unique.len(), fused.types().len());
        prop_assert!(fused.types().iter().all(|t| pool.contains(t)));
    }

    /// Property: at most 4 moves, all with distinct names
    #[test]
    fn prop_moves_bounded_and_unique(a in arb_source(), b in arb_source(), c in arb_source()) {
        let fused = engine().fuse(a, b, c).unwrap();

        prop_assert!(fused.moves().len() <= 4);
        let names: HashSet<&str> = fused.moves().iter().map(|m| m.name.as_str()).collect();
        prop_assert_eq!(names.len(), fused.moves().len());
    }

    /// Property: each kept move carries the category of its first occurrence
    #[test]
    fn prop_moves_first_occurrence_wins(a in arb_source(), b in arb_source(), c in arb_source()) {
        let all: Vec<Move> = a.moves().iter().chain(b.moves()).chain(c.moves()).cloned().collect();
        let fused = engine().fuse(a, b, c).unwrap();

        for mv in fused.moves() {
            let first = all.iter().find(|m| m.name == mv.name).unwrap();
            prop_assert_eq!(first, mv);
        }
    }

    /// Property: stats mirror the first source's names and are floored means
    #[test]
    fn prop_stats_are_floored_means(a in arb_source(), b in arb_source(), c in arb_source()) {
        let fused = engine().fuse(a.clone(), b.clone(), c.clone()).unwrap();

        prop_assert_eq!(fused.stats().len(), a.stats().len());
        for (out, input) in fused.stats().iter().zip(a.stats()) {
            prop_assert_eq!(&out.name, &input.name);
            let sum = input.value + b.stat(&input.name).unwrap_or(0) + c.stat(&input.name).unwrap_or(0);
            prop_assert_eq!(out.value, sum / 3);
        }
    }

    /// Property: fixed clock -> identical output for identical input
    #[test]
    fn prop_fusion_is_deterministic(a in arb_source(), b in arb_source(), c in arb_source()) {
        let first = engine().fuse(a.clone(), b.clone(), c.clone()).unwrap();
        let second = engine().fuse(a, b, c).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: sources are kept in call order
    #[test]
    fn prop_sources_preserved(a in arb_source(), b in arb_source(), c in arb_source()) {
        let fused = engine().fuse(a.clone(), b.clone(), c.clone()).unwrap();
        prop_assert_eq!(fused.source_records(), &[a, b, c]);
    }

    /// Property: name synthesis never panics, even on multi-byte input, and
    /// only yields an empty name when every input is empty
    #[test]
    fn prop_name_synthesis_total(n1 in "\\PC{0,10}", n2 in "\\PC{0,10}", n3 in "\\PC{0,10}") {
        let name = generate_fused_name(&n1, &n2, &n3);
        let all_empty = n1.is_empty() && n2.is_empty() && n3.is_empty();
        prop_assert_eq!(name.is_empty(), all_empty);
    }

    /// Property: ASCII names have predictable length
    #[test]
    fn prop_name_length_for_ascii(n1 in "[a-z]{2,12}", n2 in "[a-z]{1,12}", n3 in "[a-z]{2,12}") {
        let name = generate_fused_name(&n1, &n2, &n3);
        let expected = n1.len() / 2 + (n2.len() - n2.len() / 2) + n3.len() / 2;
        prop_assert_eq!(name.len(), expected);
    }

    /// Property: color lookup never fails and only known names get non-default colors
    #[test]
    fn prop_color_lookup_total(name in "[a-z_]{0,12}") {
        let color = lookup_color(&name);
        if Category::parse(&name).is_none() {
            prop_assert_eq!(color, DEFAULT_COLOR);
        }
    }
}
