// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabit Glyphs: character boxes from OCR output, ready for rectangular selection.
//!
//! Screen capture and the recognizer itself live outside this crate. It takes
//! the recognizer's per-character box rows, turns them into screen-space
//! [`Glyph`]s, indexes them with [`grabit_range_tree`], and answers drag
//! selections with text and highlight rectangles.
//!
//! - [`parse_boxes`] / [`parse_box_line`]: read `<text> <left> <bottom> <right> <top> <page>`
//!   rows relative to a [`Tile`], flipping y to point downward.
//! - [`TileGrid`]: iterate the tiles a large capture is recognized in.
//! - [`GlyphIndex`]: index glyphs at their bottom-left corner.
//! - [`GlyphIndex::select`] → [`Selection`]: glyphs in reading order, their
//!   concatenated [`text`](Selection::text) and
//!   [`highlight_rects`](Selection::highlight_rects) as Kurbo rectangles.
//!
//! # Example
//!
//! ```rust
//! use grabit_glyphs::{GlyphIndex, Tile, parse_boxes};
//! use kurbo::Point;
//!
//! // Recognizer rows for a 100x50 capture; y is measured from the bottom.
//! let rows = "H 10 30 18 45 0\ni 20 30 24 45 0\n";
//! let parsed = parse_boxes(rows, &Tile::whole(100, 50));
//! assert!(parsed.rejected.is_empty());
//!
//! let index = GlyphIndex::from(parsed);
//! let selection = index
//!     .select(Point::new(0.0, 0.0), Point::new(100.0, 50.0))
//!     .unwrap();
//! assert_eq!(selection.text(), "Hi");
//! assert_eq!(selection.highlight_rects().len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or `libm` feature so Kurbo can round selection corners.

#![no_std]

extern crate alloc;

mod boxes;
mod error;
mod glyph;
mod selection;

pub use boxes::{ParsedBoxes, RejectedLine, Tile, TileGrid, Tiles, parse_box_line, parse_boxes};
pub use error::{BoxParseError, GlyphError};
pub use glyph::Glyph;
pub use selection::{GlyphIndex, Selection};
