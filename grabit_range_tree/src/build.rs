// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive median-split construction.

use alloc::vec::Vec;

use crate::node::{Node, NodeIdx, PointId};
use crate::point::Point;

/// Builds the per-axis trees of a range tree into a single arena.
///
/// Recursion depth is `O(log n)` per axis. Nodes live in one flat arena, so
/// dropping a tree never recurses.
pub(crate) struct Builder<'a, P, const D: usize> {
    points: &'a [Point<P, D>],
    arena: Vec<Node>,
}

impl<'a, P, const D: usize> Builder<'a, P, D> {
    /// `points` must already be in reading order; their positions become point ids.
    pub(crate) fn new(points: &'a [Point<P, D>]) -> Self {
        // Room for the 2n - 1 nodes of the axis-0 tree; secondaries grow it further.
        Self {
            points,
            arena: Vec::with_capacity(points.len().saturating_mul(2)),
        }
    }

    pub(crate) fn finish(self) -> Vec<Node> {
        self.arena
    }

    /// Build the tree over `axis` for `ids` and return its root.
    ///
    /// Ties on the axis coordinate keep reading order, which makes the shape
    /// independent of the order points were supplied in.
    pub(crate) fn build_axis(&mut self, mut ids: Vec<PointId>, axis: usize) -> Option<NodeIdx> {
        if ids.is_empty() {
            return None;
        }
        let points = self.points;
        ids.sort_by_key(|&id| (points[id].coord(axis), id));

        // The secondary tree covers the whole, unsplit point set.
        let secondary = if axis + 1 < D {
            self.build_axis(ids.clone(), axis + 1)
        } else {
            None
        };

        if ids.len() == 1 {
            let split = points[ids[0]].coord(axis);
            return Some(self.push(Node {
                points: ids,
                split,
                axis,
                left: None,
                right: None,
                secondary,
            }));
        }

        // The median lands in the right half; search paths rely on this.
        let mid = ids.len() / 2;
        let split = points[ids[mid]].coord(axis);
        let left = self.build_axis(ids[..mid].to_vec(), axis);
        let right = self.build_axis(ids[mid..].to_vec(), axis);
        Some(self.push(Node {
            points: ids,
            split,
            axis,
            left,
            right,
            secondary,
        }))
    }

    fn push(&mut self, node: Node) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(node);
        idx
    }
}
