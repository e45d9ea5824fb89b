// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan reference index. Small and obviously correct; used to
//! cross-check the range tree and as a benchmark baseline.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::RangeQuery;
use crate::error::RangeTreeError;
use crate::point::{Coord, Point};
use crate::query::validate_bounds;

/// Points kept in reading order and filtered one by one on every query.
pub struct LinearScan<P, const D: usize> {
    points: Vec<Point<P, D>>,
}

impl<P, const D: usize> Debug for LinearScan<P, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("dims", &D)
            .field("points", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl<P: Ord, const D: usize> LinearScan<P, D> {
    /// Collect and sort `points`.
    pub fn new(points: impl IntoIterator<Item = Point<P, D>>) -> Self {
        let mut points: Vec<Point<P, D>> = points.into_iter().collect();
        points.sort();
        Self { points }
    }
}

impl<P, const D: usize> RangeQuery<P, D> for LinearScan<P, D> {
    fn range_query<'a>(
        &'a self,
        lower: [Coord; D],
        upper: [Coord; D],
    ) -> Result<Vec<&'a Point<P, D>>, RangeTreeError> {
        validate_bounds(&lower, &upper)?;
        Ok(self
            .points
            .iter()
            .filter(|p| p.within(&lower, &upper))
            .collect())
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
