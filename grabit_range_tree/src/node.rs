// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena nodes shared by every axis of a range tree.

use alloc::vec::Vec;

use crate::point::Coord;

/// Position of a point in the tree's point table, which is kept in reading order.
pub(crate) type PointId = usize;

/// Handle to a node in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// One node of the binary tree for a single axis.
///
/// Children and the secondary tree are owned through arena handles; nothing
/// points back up, and no handle is shared between two parents.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Every point below this node, sorted by the `axis` coordinate.
    pub(crate) points: Vec<PointId>,
    /// Left points are `<= split`, right points are `>= split`.
    pub(crate) split: Coord,
    pub(crate) axis: usize,
    pub(crate) left: Option<NodeIdx>,
    pub(crate) right: Option<NodeIdx>,
    /// Root of the tree over `axis + 1` built from the same points.
    pub(crate) secondary: Option<NodeIdx>,
}

impl Node {
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
