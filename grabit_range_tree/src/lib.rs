// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabit Range Tree: a static multi-level orthogonal range tree.
//!
//! The tree is built once over a set of labeled integer points and then answers
//! inclusive box queries with every point inside the box.
//!
//! - Build with [`RangeTree::build`]; the input order does not affect the result.
//! - Query with [`RangeTree::range_query`]; results come back in reading order
//!   (highest axis first, so rows top-to-bottom and left-to-right in 2D).
//! - Share the built tree freely: queries take `&self` and never mutate.
//!
//! Each node of the tree over axis `a` owns a secondary tree over axis `a + 1`
//! covering the same points. A query descends the axis-`a` tree twice, once for
//! each bound, takes the subtrees hanging between the two search paths below
//! their split node, and repeats on those subtrees' secondary trees. Leaves at
//! the ends of the paths may hold points outside the box, so the final step
//! filters points exactly before sorting them.
//!
//! # Example
//!
//! ```rust
//! use grabit_range_tree::{Point, RangeTree};
//!
//! let tree = RangeTree::build([
//!     Point::new([1, 1], "a"),
//!     Point::new([3, 1], "b"),
//!     Point::new([1, 3], "c"),
//!     Point::new([3, 3], "d"),
//! ]);
//!
//! let hits = tree.range_query([0, 0], [2, 2]).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(*hits[0].payload(), "a");
//!
//! let all: Vec<_> = tree
//!     .range_query([0, 0], [4, 4])
//!     .unwrap()
//!     .into_iter()
//!     .map(|p| *p.payload())
//!     .collect();
//! assert_eq!(all, ["a", "b", "c", "d"]);
//! ```
//!
//! ## Errors
//!
//! Boxes with `lower[d] > upper[d]` are rejected with
//! [`RangeTreeError::InvertedBounds`]. The remaining variants describe a
//! corrupted tree and are also what [`RangeTree::check_invariants`] reports.
//!
//! ## Choosing an index
//!
//! - [`RangeTree`]: `O(log^D n + k)` queries after an `O(n log^D n)` build.
//! - [`LinearScan`]: no build cost, `O(n)` per query. Handy as a reference and
//!   for very small sets.
//!
//! Both implement [`RangeQuery`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod error;
pub mod linear;
pub mod point;
pub mod tree;

mod build;
mod node;
mod query;
mod search;

#[cfg(test)]
mod cross_check;

pub use backend::RangeQuery;
pub use error::RangeTreeError;
pub use linear::LinearScan;
pub use point::{Coord, Point};
pub use tree::RangeTree;
