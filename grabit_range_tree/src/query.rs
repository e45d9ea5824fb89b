// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical-node decomposition of a query box, one axis at a time.

use alloc::vec::Vec;

use crate::error::RangeTreeError;
use crate::node::{Node, NodeIdx};
use crate::point::Coord;
use crate::search::{BoundKind, Direction, search_path};

/// Reject boxes whose lower corner exceeds the upper corner on any axis.
pub(crate) fn validate_bounds<const D: usize>(
    lower: &[Coord; D],
    upper: &[Coord; D],
) -> Result<(), RangeTreeError> {
    match lower.iter().zip(upper).position(|(lo, hi)| lo > hi) {
        Some(axis) => Err(RangeTreeError::InvertedBounds {
            axis,
            lower: lower[axis],
            upper: upper[axis],
        }),
        None => Ok(()),
    }
}

/// Push onto `out` the last-axis nodes whose points cover the query box.
///
/// Every node pushed is constrained on all axes before the last one. Leaves
/// reached at the ends of the search paths are included even if their point
/// falls outside the box, so callers must filter points exactly.
pub(crate) fn collect_canonical<const D: usize>(
    arena: &[Node],
    root: NodeIdx,
    lower: &[Coord; D],
    upper: &[Coord; D],
    axis: usize,
    out: &mut Vec<NodeIdx>,
) -> Result<(), RangeTreeError> {
    let lower_path = search_path(arena, root, lower[axis], BoundKind::Lower);
    let upper_path = search_path(arena, root, upper[axis], BoundKind::Upper);

    let shared = lower_path
        .iter()
        .zip(&upper_path)
        .take_while(|(l, u)| l.0 == u.0)
        .count();
    let Some(split_at) = shared.checked_sub(1) else {
        tracing::error!(axis, "search paths share no split node");
        return Err(RangeTreeError::NoSplitNode { axis });
    };
    let split = lower_path[split_at].0;

    let mut canonical = Vec::new();
    if arena[split.get()].is_leaf() {
        // Both paths end at the same leaf.
        canonical.push(split);
    } else {
        for &(idx, dir) in lower_path[split_at + 1..].iter().rev() {
            let node = &arena[idx.get()];
            if dir == Direction::Left
                && let Some(right) = node.right
            {
                canonical.push(right);
            }
            if node.is_leaf() {
                canonical.push(idx);
            }
        }
        for &(idx, dir) in &upper_path[split_at + 1..] {
            let node = &arena[idx.get()];
            if dir == Direction::Right
                && let Some(left) = node.left
            {
                canonical.push(left);
            }
            if node.is_leaf() {
                canonical.push(idx);
            }
        }
    }
    tracing::trace!(
        axis,
        split = split.get(),
        canonical = canonical.len(),
        "canonical decomposition"
    );

    if axis + 1 == D {
        out.extend(canonical);
        return Ok(());
    }
    for idx in canonical {
        let Some(secondary) = arena[idx.get()].secondary else {
            tracing::error!(axis, node = idx.get(), "missing secondary tree");
            return Err(RangeTreeError::MissingSecondary { axis });
        };
        collect_canonical(arena, secondary, lower, upper, axis + 1, out)?;
    }
    Ok(())
}
