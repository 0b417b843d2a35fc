//! Property-based invariant tests for the layout pipeline.
//!
//! Verifies:
//! 1. summarize is total over arbitrary expressions
//! 2. call arguments collapse to `...` exactly when the per-argument share is <= 5
//! 3. assign_colors is a function of label identity
//! 4. permuting labels permutes colors the same way
//! 5. colors repeat with period equal to the largest swatch set once exhausted
//! 6. timeline rectangles keep width = end - start and x_center = start + width/2 - left

use proptest::prelude::*;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use tracechart_core::{ExecutionRecord, Expr, PaletteCatalog, TaskKey};
use tracechart_layout::{assign_colors, summarize, TimelineLayoutBuilder};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arb_leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i64>().prop_map(Expr::leaf),
        "[a-e]".prop_map(Expr::leaf),
        Just(Expr::leaf(Value::Null)),
        Just(Expr::Opaque),
    ]
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    arb_leaf().prop_recursive(6, 64, 8, |inner| {
        prop_oneof![
            (arb_name(), prop::collection::vec(inner.clone(), 0..6))
                .prop_map(|(name, args)| Expr::call(name, args)),
            (prop::collection::vec(arb_name(), 1..4), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(funcs, args)| Expr::composed(funcs, args)),
            prop::collection::vec(inner, 0..10).prop_map(Expr::list),
        ]
    })
}

fn keys() -> HashSet<TaskKey> {
    ["a", "b", "c"].into_iter().map(TaskKey::from).collect()
}

proptest! {
    #[test]
    fn summarize_is_total(expr in arb_expr(), budget in 0usize..200) {
        let text = summarize(&expr, &keys(), budget);
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn arguments_collapse_below_share(
        name in arb_name(),
        args in prop::collection::vec(arb_leaf(), 1..6),
        budget in 0usize..120,
    ) {
        let expr = Expr::call(name.clone(), args.clone());
        let text = summarize(&expr, &keys(), budget);
        let share = (budget as i64 - name.len() as i64 - 1) / args.len() as i64;
        if share > 5 {
            prop_assert!(!text.contains("..."));
            prop_assert_eq!(text.matches(", ").count(), args.len() - 1);
        } else {
            prop_assert_eq!(text, format!("{}(...)", name));
        }
    }

    #[test]
    fn colors_depend_only_on_labels(labels in prop::collection::vec(0u8..20, 0..40)) {
        let catalog = PaletteCatalog::builtin();
        let first = assign_colors(catalog, "Set1", &labels).unwrap();
        let second = assign_colors(catalog, "Set1", &labels).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), labels.len());
        for (i, a) in labels.iter().enumerate() {
            for (j, b) in labels.iter().enumerate() {
                if a == b {
                    prop_assert_eq!(&first[i], &first[j]);
                }
            }
        }
    }

    #[test]
    fn permuting_labels_permutes_colors(
        labels in prop::collection::vec(0u8..12, 1..30),
        seed in any::<u64>(),
    ) {
        let catalog = PaletteCatalog::builtin();
        let mut order: Vec<usize> = (0..labels.len()).collect();
        // deterministic shuffle from the seed
        let mut state = seed | 1;
        for i in (1..order.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            order.swap(i, (state % (i as u64 + 1)) as usize);
        }
        let permuted: Vec<u8> = order.iter().map(|&i| labels[i]).collect();

        let colors = assign_colors(catalog, "GnBu", &labels).unwrap();
        let permuted_colors = assign_colors(catalog, "GnBu", &permuted).unwrap();
        for (pos, &src) in order.iter().enumerate() {
            prop_assert_eq!(&permuted_colors[pos], &colors[src]);
        }
    }

    #[test]
    fn exhausted_palette_repeats_with_largest_period(n in 10usize..40) {
        let catalog = PaletteCatalog::builtin();
        let high = catalog.get("Blues").unwrap().max_size();
        let labels: Vec<usize> = (0..n).collect();
        let colors = assign_colors(catalog, "Blues", &labels).unwrap();
        for i in high..n {
            prop_assert_eq!(&colors[i], &colors[i - high]);
        }
        let distinct: BTreeSet<_> = colors.iter().collect();
        prop_assert_eq!(distinct.len(), high);
    }

    #[test]
    fn rectangles_follow_record_times(
        spans in prop::collection::vec((0.0f64..1000.0, 0.0f64..50.0, 0u8..4), 1..30),
    ) {
        let records: Vec<ExecutionRecord> = spans
            .iter()
            .enumerate()
            .map(|(i, &(start, len, slot))| {
                ExecutionRecord::new(
                    TaskKey::new(i.to_string()),
                    Expr::leaf(1),
                    start,
                    start + len,
                    u64::from(slot),
                )
            })
            .collect();
        let left = records.iter().map(|r| r.start_time).fold(f64::INFINITY, f64::min);
        let chart = TimelineLayoutBuilder::new().build(&records).unwrap();
        let rects = chart.rectangles().unwrap();
        prop_assert_eq!(rects.len(), records.len());
        let slots: BTreeSet<_> = records.iter().map(|r| r.slot_id.clone()).collect();
        for (rect, record) in rects.iter().zip(&records) {
            prop_assert_eq!(rect.width, record.end_time - record.start_time);
            prop_assert!((rect.x_center - (record.start_time + rect.width / 2.0 - left)).abs() < 1e-9);
            prop_assert!(rect.y >= 1 && rect.y <= slots.len());
        }
    }
}
