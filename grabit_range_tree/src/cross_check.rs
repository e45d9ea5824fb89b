// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests comparing the range tree against the linear scan.

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{LinearScan, Point, RangeQuery, RangeTree};

type Labeled = Point<u8, 2>;

fn points(max: usize) -> impl Strategy<Value = Vec<Labeled>> {
    // A narrow coordinate range forces plenty of shared split values.
    prop::collection::vec((-12_i64..12, -12_i64..12, any::<u8>()), 0..max)
        .prop_map(|v| v.into_iter().map(|(x, y, l)| Point::new([x, y], l)).collect())
}

fn query_box() -> impl Strategy<Value = ([i64; 2], [i64; 2])> {
    (-14_i64..14, -14_i64..14, -14_i64..14, -14_i64..14)
        .prop_map(|(x0, y0, x1, y1)| ([x0.min(x1), y0.min(y1)], [x0.max(x1), y0.max(y1)]))
}

fn owned(hits: Vec<&Labeled>) -> Vec<Labeled> {
    hits.into_iter().cloned().collect()
}

proptest! {
    #[test]
    fn matches_linear_scan(pts in points(80), (lower, upper) in query_box()) {
        let tree = RangeTree::build(pts.clone());
        let scan = LinearScan::new(pts);
        prop_assert!(tree.check_invariants().is_ok());
        let got = owned(tree.range_query(lower, upper).unwrap());
        let want = owned(scan.range_query(lower, upper).unwrap());
        prop_assert_eq!(got, want);
    }

    #[test]
    fn results_are_inside_and_ordered(pts in points(80), (lower, upper) in query_box()) {
        let tree = RangeTree::build(pts);
        let hits = tree.range_query(lower, upper).unwrap();
        prop_assert!(hits.iter().all(|p| p.within(&lower, &upper)));
        prop_assert!(hits.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn input_order_does_not_matter(
        (pts, shuffled) in points(60).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        (lower, upper) in query_box(),
    ) {
        let a = RangeTree::build(pts);
        let b = RangeTree::build(shuffled);
        prop_assert_eq!(
            owned(a.range_query(lower, upper).unwrap()),
            owned(b.range_query(lower, upper).unwrap())
        );
    }

    #[test]
    fn degenerate_boxes_hit_exact_coordinates(pts in points(60), x in -12_i64..12, y in -12_i64..12) {
        let tree = RangeTree::build(pts.clone());
        let hits = tree.range_query([x, y], [x, y]).unwrap();
        let expected = pts.iter().filter(|p| p.coords() == &[x, y]).count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn three_axes_match_linear_scan(
        pts in prop::collection::vec((0_i64..6, 0_i64..6, 0_i64..6), 0..50),
        lo in (0_i64..6, 0_i64..6, 0_i64..6),
        ext in (0_i64..4, 0_i64..4, 0_i64..4),
    ) {
        let pts: Vec<Point<(), 3>> = pts.into_iter().map(|(x, y, z)| Point::new([x, y, z], ())).collect();
        let lower = [lo.0, lo.1, lo.2];
        let upper = [lo.0 + ext.0, lo.1 + ext.1, lo.2 + ext.2];
        let tree = RangeTree::build(pts.clone());
        let scan = LinearScan::new(pts);
        let got: Vec<_> = tree.range_query(lower, upper).unwrap().into_iter().cloned().collect();
        let want: Vec<_> = scan.range_query(lower, upper).unwrap().into_iter().cloned().collect();
        prop_assert_eq!(got, want);
    }
}
