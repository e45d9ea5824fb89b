// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query trait shared by the range tree and the linear-scan reference.

use alloc::vec::Vec;

use crate::error::RangeTreeError;
use crate::point::{Coord, Point};

/// A static point set that answers inclusive box queries in reading order.
pub trait RangeQuery<P, const D: usize> {
    /// Points inside `lower..=upper`, sorted by the [`Point`] order.
    fn range_query<'a>(
        &'a self,
        lower: [Coord; D],
        upper: [Coord; D],
    ) -> Result<Vec<&'a Point<P, D>>, RangeTreeError>;

    /// Number of indexed points.
    fn len(&self) -> usize;

    /// True if no points are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P, const D: usize> RangeQuery<P, D> for crate::RangeTree<P, D> {
    fn range_query<'a>(
        &'a self,
        lower: [Coord; D],
        upper: [Coord; D],
    ) -> Result<Vec<&'a Point<P, D>>, RangeTreeError> {
        Self::range_query(self, lower, upper)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}
