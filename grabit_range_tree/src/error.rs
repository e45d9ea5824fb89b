// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by range tree queries and invariant checks.

use crate::point::Coord;

/// Failure of a range query or of [`RangeTree::check_invariants`](crate::RangeTree::check_invariants).
///
/// Only [`InvertedBounds`](Self::InvertedBounds) is a caller error. Every other
/// variant means the tree itself is inconsistent, which a tree produced by
/// [`RangeTree::build`](crate::RangeTree::build) never is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeTreeError {
    /// The lower and upper search paths share no node, not even the root.
    #[error("search paths on axis {axis} share no split node")]
    NoSplitNode {
        /// Axis being decomposed.
        axis: usize,
    },
    /// The query's lower corner exceeds its upper corner on some axis.
    #[error("inverted query bounds on axis {axis}: {lower} > {upper}")]
    InvertedBounds {
        /// First axis where the bounds are inverted.
        axis: usize,
        /// Lower bound on that axis.
        lower: Coord,
        /// Upper bound on that axis.
        upper: Coord,
    },
    /// A node on a non-terminal axis has no secondary tree for the next axis.
    #[error("node on axis {axis} is missing its secondary tree")]
    MissingSecondary {
        /// Axis of the node lacking a secondary tree.
        axis: usize,
    },
    /// A child holds a point on the wrong side of its parent's split value.
    #[error("point on the wrong side of split {split} on axis {axis}")]
    BrokenPartition {
        /// Axis of the offending node.
        axis: usize,
        /// Split value of the offending node.
        split: Coord,
    },
    /// A node has a shape that violates the leaf, ordering, or coverage rules.
    #[error("malformed node on axis {axis}")]
    MalformedNode {
        /// Axis of the offending node.
        axis: usize,
    },
}
