// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled points and the reading order used for query results.

use core::cmp::Ordering;
use core::ops::Index;

/// Integer coordinate type used on every axis.
pub type Coord = i64;

/// An immutable point with `D` integer coordinates and a payload.
///
/// Equality is structural: two points are equal when both their coordinates and
/// their payloads are equal.
///
/// ## Reading order
///
/// Points order *reverse-lexicographically* over their coordinates: the
/// highest-indexed axis is compared first and ties fall back to lower axes. For
/// `D = 2` with screen coordinates `[x, y]` this is top-to-bottom, then
/// left-to-right. See [`Point::reading_cmp`].
///
/// The [`Ord`] impl extends the reading order with the payload so that points
/// sharing every coordinate still sort deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<P, const D: usize> {
    coords: [Coord; D],
    payload: P,
}

impl<P, const D: usize> Point<P, D> {
    /// Create a point from its coordinates and payload.
    pub const fn new(coords: [Coord; D], payload: P) -> Self {
        Self { coords, payload }
    }

    /// All coordinates, indexed by axis.
    pub const fn coords(&self) -> &[Coord; D] {
        &self.coords
    }

    /// The coordinate on `axis`.
    ///
    /// Panics if `axis >= D`.
    pub const fn coord(&self, axis: usize) -> Coord {
        self.coords[axis]
    }

    /// The payload attached to this point.
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the point and return its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Compare two points by coordinates only, highest axis first.
    ///
    /// This is the order returned by range queries.
    pub fn reading_cmp(&self, other: &Self) -> Ordering {
        self.coords.iter().rev().cmp(other.coords.iter().rev())
    }

    /// Whether every coordinate lies in the inclusive box `lower..=upper`.
    pub fn within(&self, lower: &[Coord; D], upper: &[Coord; D]) -> bool {
        self.coords
            .iter()
            .zip(lower.iter().zip(upper))
            .all(|(c, (lo, hi))| lo <= c && c <= hi)
    }
}

impl<P, const D: usize> Index<usize> for Point<P, D> {
    type Output = Coord;

    fn index(&self, axis: usize) -> &Coord {
        &self.coords[axis]
    }
}

impl<P: Ord, const D: usize> PartialOrd for Point<P, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, const D: usize> Ord for Point<P, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.reading_cmp(other)
            .then_with(|| self.payload.cmp(&other.payload))
    }
}
