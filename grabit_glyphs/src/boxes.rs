// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing recognizer box output into screen-space glyphs.
//!
//! Each row has the form `<text> <left> <bottom> <right> <top> <page>` with y
//! measured upward from the bottom of the recognized image. Large captures are
//! recognized tile by tile, so every row is parsed relative to the [`Tile`] it
//! came from and converted to whole-image screen coordinates (y downward).

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use grabit_range_tree::Coord;

use crate::error::BoxParseError;
use crate::glyph::Glyph;

/// A rectangular region of the captured image, in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Left edge within the whole image.
    pub x: Coord,
    /// Top edge within the whole image.
    pub y: Coord,
    /// Width in pixels.
    pub width: Coord,
    /// Height in pixels.
    pub height: Coord,
}

impl Tile {
    /// A tile covering a whole `width` x `height` image.
    pub const fn whole(width: Coord, height: Coord) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Convert a bottom-up y within this tile to a top-down y in the whole image.
    ///
    /// Returns `None` if the result does not fit in a [`Coord`].
    pub const fn flip_y(&self, y: Coord) -> Option<Coord> {
        match self.height.checked_sub(y) {
            Some(h) => h.checked_add(self.y),
            None => None,
        }
    }

    /// Convert a left edge within this tile to one in the whole image.
    ///
    /// Returns `None` if the result does not fit in a [`Coord`].
    pub const fn shift_x(&self, x: Coord) -> Option<Coord> {
        x.checked_add(self.x)
    }
}

/// Splits an image into fixed-size tiles, clamped at the right and bottom edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    /// Image width in pixels.
    pub width: Coord,
    /// Image height in pixels.
    pub height: Coord,
    /// Nominal tile width.
    pub tile_width: Coord,
    /// Nominal tile height.
    pub tile_height: Coord,
}

impl TileGrid {
    /// Tile edge length used by [`TileGrid::new`].
    pub const DEFAULT_TILE: Coord = 1000;

    /// A grid over a `width` x `height` image with the default tile size.
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self {
            width,
            height,
            tile_width: Self::DEFAULT_TILE,
            tile_height: Self::DEFAULT_TILE,
        }
    }

    /// Replace the tile size.
    pub const fn with_tile_size(mut self, tile_width: Coord, tile_height: Coord) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    /// Iterate tiles row by row, left to right.
    ///
    /// Yields nothing if any dimension is not positive.
    pub fn tiles(&self) -> Tiles {
        Tiles {
            grid: *self,
            x: 0,
            y: 0,
        }
    }
}

/// Iterator returned by [`TileGrid::tiles`].
#[derive(Clone, Debug)]
pub struct Tiles {
    grid: TileGrid,
    x: Coord,
    y: Coord,
}

impl Iterator for Tiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let g = self.grid;
        if g.width <= 0 || g.height <= 0 || g.tile_width <= 0 || g.tile_height <= 0 {
            return None;
        }
        if self.y >= g.height {
            return None;
        }
        let tile = Tile {
            x: self.x,
            y: self.y,
            width: g.tile_width.min(g.width - self.x),
            height: g.tile_height.min(g.height - self.y),
        };
        self.x = self.x.saturating_add(g.tile_width);
        if self.x >= g.width {
            self.x = 0;
            self.y = self.y.saturating_add(g.tile_height);
        }
        Some(tile)
    }
}

/// Parse one box row recognized within `tile`.
pub fn parse_box_line(line: &str, tile: &Tile) -> Result<Glyph, BoxParseError> {
    let mut fields = line.split_whitespace();
    let text = fields.next().ok_or(BoxParseError::MissingField("text"))?;
    let left: Coord = number(&mut fields, "left")?;
    let bottom: Coord = number(&mut fields, "bottom")?;
    let right: Coord = number(&mut fields, "right")?;
    let top: Coord = number(&mut fields, "top")?;
    let page: u32 = number(&mut fields, "page")?;
    if let Some(extra) = fields.next() {
        return Err(BoxParseError::TrailingField(extra.into()));
    }
    let overflow = |field| BoxParseError::CoordinateOverflow { field };
    Ok(Glyph {
        text: text.into(),
        left: tile.shift_x(left).ok_or(overflow("left"))?,
        bottom: tile.flip_y(bottom).ok_or(overflow("bottom"))?,
        right: tile.shift_x(right).ok_or(overflow("right"))?,
        top: tile.flip_y(top).ok_or(overflow("top"))?,
        page,
    })
}

fn number<'a, T: FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, BoxParseError> {
    let raw = fields.next().ok_or(BoxParseError::MissingField(field))?;
    raw.parse().map_err(|_| BoxParseError::InvalidNumber {
        field,
        value: String::from(raw),
    })
}

/// A row that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number within the parsed text.
    pub line: usize,
    /// Why the row was rejected.
    pub error: BoxParseError,
}

/// Result of [`parse_boxes`]: the glyphs that parsed and the rows that did not.
#[derive(Clone, Debug, Default)]
pub struct ParsedBoxes {
    /// Parsed glyphs in input order.
    pub glyphs: Vec<Glyph>,
    /// Rows that were skipped.
    pub rejected: Vec<RejectedLine>,
}

impl ParsedBoxes {
    /// Append the rows of `text`, recognized within `tile`.
    ///
    /// Blank lines are ignored. A malformed row is logged and recorded in
    /// [`rejected`](Self::rejected); the remaining rows are still parsed.
    pub fn extend_from_text(&mut self, text: &str, tile: &Tile) {
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_box_line(line, tile) {
                Ok(glyph) => self.glyphs.push(glyph),
                Err(error) => {
                    tracing::warn!(line = i + 1, %error, "skipping box row");
                    self.rejected.push(RejectedLine { line: i + 1, error });
                }
            }
        }
        tracing::debug!(
            tile_x = tile.x,
            tile_y = tile.y,
            glyphs = self.glyphs.len(),
            rejected = self.rejected.len(),
            "parsed box rows"
        );
    }
}

/// Parse every row of `text`, recognized within `tile`.
pub fn parse_boxes(text: &str, tile: &Tile) -> ParsedBoxes {
    let mut parsed = ParsedBoxes::default();
    parsed.extend_from_text(text, tile);
    parsed
}
