// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular text selection over an indexed set of glyphs.

use alloc::string::String;
use alloc::vec::Vec;

use grabit_range_tree::{Coord, Point, RangeTree};
use kurbo::Rect;

use crate::boxes::ParsedBoxes;
use crate::error::GlyphError;
use crate::glyph::Glyph;

/// Glyphs of one capture, indexed for rectangular selection.
#[derive(Debug, Default)]
pub struct GlyphIndex {
    tree: RangeTree<Glyph, 2>,
}

impl GlyphIndex {
    /// Index `glyphs` by their anchors.
    pub fn new(glyphs: impl IntoIterator<Item = Glyph>) -> Self {
        Self {
            tree: RangeTree::build(glyphs.into_iter().map(Glyph::into_point)),
        }
    }

    /// Number of indexed glyphs.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True if nothing was recognized.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying range tree.
    pub fn tree(&self) -> &RangeTree<Glyph, 2> {
        &self.tree
    }

    /// Select the glyphs dragged over from `start` to `end`.
    ///
    /// The corners may come in any order; they are normalized and rounded to
    /// whole pixels, and both edges are inclusive.
    pub fn select(
        &self,
        start: kurbo::Point,
        end: kurbo::Point,
    ) -> Result<Selection<'_>, GlyphError> {
        // `Rect::from_points` would quietly drop a NaN through `f64::min`.
        if !start.is_finite() || !end.is_finite() {
            return Err(GlyphError::NonFiniteSelection);
        }
        self.select_rect(Rect::from_points(start, end))
    }

    /// Select the glyphs anchored inside `rect`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Rounded screen coordinates fit in i64; the cast saturates otherwise."
    )]
    pub fn select_rect(&self, rect: Rect) -> Result<Selection<'_>, GlyphError> {
        if !rect.is_finite() {
            return Err(GlyphError::NonFiniteSelection);
        }
        let r = rect.abs().round();
        let lower = [r.x0 as Coord, r.y0 as Coord];
        let upper = [r.x1 as Coord, r.y1 as Coord];
        let points = self.tree.range_query(lower, upper)?;
        tracing::debug!(?lower, ?upper, glyphs = points.len(), "selection");
        Ok(Selection { points })
    }
}

impl From<ParsedBoxes> for GlyphIndex {
    fn from(parsed: ParsedBoxes) -> Self {
        Self::new(parsed.glyphs)
    }
}

/// Glyphs picked by a selection, in reading order.
///
/// An empty selection means there is no text in the region.
#[derive(Clone, Debug)]
pub struct Selection<'a> {
    points: Vec<&'a Point<Glyph, 2>>,
}

impl<'a> Selection<'a> {
    /// Number of selected glyphs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the selection holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Selected glyphs in reading order.
    pub fn glyphs(&self) -> impl Iterator<Item = &'a Glyph> + '_ {
        self.points.iter().map(|&p| p.payload())
    }

    /// The selected text: every glyph's text, concatenated in reading order.
    pub fn text(&self) -> String {
        self.glyphs().map(|g| g.text.as_str()).collect()
    }

    /// One normalized rectangle per selected glyph, for highlighting.
    pub fn highlight_rects(&self) -> Vec<Rect> {
        self.glyphs().map(Glyph::bounds).collect()
    }

    /// Union of all highlight rectangles. Returns `None` if empty.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.glyphs().map(Glyph::bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}
