// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public [`RangeTree`]: build once, query many.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::build::Builder;
use crate::error::RangeTreeError;
use crate::node::{Node, NodeIdx, PointId};
use crate::point::{Coord, Point};
use crate::query::{collect_canonical, validate_bounds};

/// An immutable `D`-dimensional orthogonal range tree.
///
/// The tree over axis 0 is a median-split binary tree. Every node on a
/// non-terminal axis owns a secondary tree over the next axis built from the
/// same points. All nodes of all axes live in one arena and refer to each other
/// by index, so dropping the tree never recurses.
///
/// Queries take `&self` and never mutate, so a built tree can be shared across
/// threads whenever `P` is `Sync`.
pub struct RangeTree<P, const D: usize> {
    /// Points in reading order; a point's position is its id.
    points: Vec<Point<P, D>>,
    arena: Vec<Node>,
    root: Option<NodeIdx>,
}

impl<P, const D: usize> Debug for RangeTree<P, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeTree")
            .field("dims", &D)
            .field("points", &self.points.len())
            .field("nodes", &self.arena.len())
            .finish_non_exhaustive()
    }
}

impl<P, const D: usize> Default for RangeTree<P, D> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            arena: Vec::new(),
            root: None,
        }
    }
}

impl<P: Ord, const D: usize> RangeTree<P, D> {
    /// Build a tree over `points`.
    ///
    /// An empty input produces an empty tree that answers every query with no
    /// points. The result does not depend on the order of the input.
    ///
    /// Payloads are otherwise opaque, but must be [`Ord`]: points with equal
    /// coordinates are ordered by payload, which keeps both the tree shape and
    /// the order of query results independent of input order. Payloads without
    /// a natural order can be wrapped with an index or an ordered key.
    pub fn build(points: impl IntoIterator<Item = Point<P, D>>) -> Self {
        const { assert!(D > 0, "a range tree needs at least one axis") };

        let mut points: Vec<Point<P, D>> = points.into_iter().collect();
        points.sort();

        let mut builder = Builder::new(&points);
        let root = builder.build_axis((0..points.len()).collect(), 0);
        let arena = builder.finish();
        tracing::debug!(
            dims = D,
            points = points.len(),
            nodes = arena.len(),
            "built range tree"
        );
        Self {
            points,
            arena,
            root,
        }
    }
}

impl<P: Ord, const D: usize> FromIterator<Point<P, D>> for RangeTree<P, D> {
    fn from_iter<I: IntoIterator<Item = Point<P, D>>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<P, const D: usize> RangeTree<P, D> {
    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the tree indexes no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of dimensions.
    pub const fn dims(&self) -> usize {
        D
    }

    /// Total nodes across the primary tree and every secondary tree.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// All indexed points in reading order.
    pub fn points(&self) -> &[Point<P, D>] {
        &self.points
    }

    /// Return every point inside the inclusive box `lower..=upper`, in reading order.
    ///
    /// Fails with [`RangeTreeError::InvertedBounds`] if `lower[d] > upper[d]`
    /// on any axis. The other error variants only occur on a corrupted tree.
    pub fn range_query(
        &self,
        lower: [Coord; D],
        upper: [Coord; D],
    ) -> Result<Vec<&Point<P, D>>, RangeTreeError> {
        validate_bounds(&lower, &upper)?;
        let Some(root) = self.root else {
            return Ok(Vec::new());
        };

        let mut nodes = Vec::new();
        collect_canonical(&self.arena, root, &lower, &upper, 0, &mut nodes)?;

        // Leaves on the search paths may hold points outside the box.
        let mut hits: Vec<PointId> = nodes
            .iter()
            .flat_map(|n| self.arena[n.get()].points.iter().copied())
            .filter(|&id| self.points[id].within(&lower, &upper))
            .collect();
        // Ids follow reading order, so sorting ids sorts the points.
        hits.sort_unstable();
        Ok(hits.into_iter().map(|id| &self.points[id]).collect())
    }

    /// Verify the structural invariants of every node on every axis.
    ///
    /// - A node is a leaf exactly when it holds one point, and a leaf's split
    ///   is that point's coordinate.
    /// - A node's points are sorted by its axis coordinate.
    /// - Left points are `<= split` and right points are `>= split`, and the two
    ///   children together hold exactly the parent's points.
    /// - A node on a non-terminal axis has a secondary tree over the same
    ///   points; a node on the last axis has none.
    pub fn check_invariants(&self) -> Result<(), RangeTreeError> {
        match self.root {
            Some(root) => {
                let mut all: Vec<PointId> = self.arena[root.get()].points.clone();
                all.sort_unstable();
                if all.len() != self.points.len() || all.iter().enumerate().any(|(i, &id)| i != id)
                {
                    return Err(RangeTreeError::MalformedNode { axis: 0 });
                }
                self.check_node(root, 0)
            }
            None if self.points.is_empty() => Ok(()),
            None => Err(RangeTreeError::MalformedNode { axis: 0 }),
        }
    }

    fn check_node(&self, idx: NodeIdx, axis: usize) -> Result<(), RangeTreeError> {
        let node = &self.arena[idx.get()];
        let malformed = RangeTreeError::MalformedNode { axis };
        if node.axis != axis || node.points.is_empty() {
            return Err(malformed);
        }
        let key = |id: PointId| (self.points[id].coord(axis), id);
        if node.points.windows(2).any(|w| key(w[0]) > key(w[1])) {
            return Err(malformed);
        }

        match (node.left, node.right) {
            (None, None) => {
                if node.points.len() != 1 {
                    return Err(malformed);
                }
                if self.points[node.points[0]].coord(axis) != node.split {
                    return Err(RangeTreeError::BrokenPartition {
                        axis,
                        split: node.split,
                    });
                }
            }
            (Some(left), Some(right)) => {
                let l = &self.arena[left.get()];
                let r = &self.arena[right.get()];
                let broken = RangeTreeError::BrokenPartition {
                    axis,
                    split: node.split,
                };
                if l.points.iter().any(|&id| self.points[id].coord(axis) > node.split)
                    || r.points.iter().any(|&id| self.points[id].coord(axis) < node.split)
                {
                    return Err(broken);
                }
                if !same_points(&node.points, l.points.iter().chain(&r.points).copied()) {
                    return Err(malformed);
                }
                self.check_node(left, axis)?;
                self.check_node(right, axis)?;
            }
            _ => return Err(malformed),
        }

        match node.secondary {
            Some(secondary) if axis + 1 < D => {
                if !same_points(
                    &node.points,
                    self.arena[secondary.get()].points.iter().copied(),
                ) {
                    return Err(RangeTreeError::MalformedNode { axis: axis + 1 });
                }
                self.check_node(secondary, axis + 1)
            }
            None if axis + 1 < D => Err(RangeTreeError::MissingSecondary { axis }),
            Some(_) => Err(malformed),
            None => Ok(()),
        }
    }
}

/// Whether `other` holds exactly the ids in `points`, in any order.
fn same_points(points: &[PointId], other: impl Iterator<Item = PointId>) -> bool {
    let mut a = points.to_vec();
    let mut b: Vec<PointId> = other.collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
