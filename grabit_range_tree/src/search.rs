// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root-to-leaf descent paths for a coordinate bound.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::node::{Node, NodeIdx};
use crate::point::Coord;

/// Step taken out of a node on a search path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

/// Which end of the query interval a path is searching for.
///
/// A bound equal to a node's split descends left when it is a lower bound and
/// right when it is an upper bound, so both paths stay inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BoundKind {
    Lower,
    Upper,
}

/// Visited nodes paired with the direction taken out of each.
pub(crate) type SearchPath = Vec<(NodeIdx, Direction)>;

/// Descend from `root` toward `bound`, stopping after the leaf.
pub(crate) fn search_path(
    arena: &[Node],
    root: NodeIdx,
    bound: Coord,
    kind: BoundKind,
) -> SearchPath {
    let mut path = Vec::new();
    let mut cursor = Some(root);
    while let Some(idx) = cursor {
        let node = &arena[idx.get()];
        let dir = match (bound.cmp(&node.split), kind) {
            (Ordering::Less, _) | (Ordering::Equal, BoundKind::Lower) => Direction::Left,
            (Ordering::Greater, _) | (Ordering::Equal, BoundKind::Upper) => Direction::Right,
        };
        path.push((idx, dir));
        cursor = match dir {
            Direction::Left => node.left,
            Direction::Right => node.right,
        };
    }
    path
}
