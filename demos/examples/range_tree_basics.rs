// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range tree basics.
//!
//! Build a tree over four labeled points and run a few box queries.
//!
//! Run:
//! - `cargo run -p grabit_demos --example range_tree_basics`
//! - `RUST_LOG=trace cargo run -p grabit_demos --example range_tree_basics` to see the decomposition

use grabit_range_tree::{Point, RangeTree, RangeTreeError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RangeTreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = RangeTree::build([
        Point::new([3, 3], "d"),
        Point::new([1, 1], "a"),
        Point::new([1, 3], "c"),
        Point::new([3, 1], "b"),
    ]);
    println!("{tree:?}");
    tree.check_invariants()?;

    for (lower, upper) in [([0, 0], [2, 2]), ([0, 0], [4, 4]), ([3, 0], [3, 4])] {
        let labels: Vec<_> = tree
            .range_query(lower, upper)?
            .into_iter()
            .map(|p| *p.payload())
            .collect();
        println!("{lower:?}..={upper:?} -> {labels:?}");
    }

    // Inverted boxes are rejected rather than silently answered.
    match tree.range_query([4, 0], [0, 4]) {
        Err(err) => println!("rejected: {err}"),
        Ok(hits) => println!("unexpected hits: {}", hits.len()),
    }
    Ok(())
}
