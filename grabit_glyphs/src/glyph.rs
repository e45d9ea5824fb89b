// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recognized character box.

use alloc::string::String;

use grabit_range_tree::{Coord, Point};
use kurbo::Rect;

/// One recognized character and its box, in screen pixels (y grows downward).
///
/// `bottom` and `top` keep the recognizer's naming: after conversion to screen
/// space `bottom` is usually the larger y value.
///
/// A glyph is indexed at its [`anchor`](Self::anchor), `[left, bottom]`, so a
/// selection picks up every glyph whose bottom-left corner it contains.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Glyph {
    /// Recognized text, usually a single character.
    pub text: String,
    /// Left edge.
    pub left: Coord,
    /// Bottom edge.
    pub bottom: Coord,
    /// Right edge.
    pub right: Coord,
    /// Top edge.
    pub top: Coord,
    /// Page number reported by the recognizer.
    pub page: u32,
}

impl Glyph {
    /// The coordinates this glyph is indexed under.
    pub const fn anchor(&self) -> [Coord; 2] {
        [self.left, self.bottom]
    }

    /// Wrap this glyph as a range tree point at its anchor.
    pub fn into_point(self) -> Point<Self, 2> {
        Point::new(self.anchor(), self)
    }

    /// The glyph's box with min/max corners normalized.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.left as f64,
            self.bottom as f64,
            self.right as f64,
            self.top as f64,
        )
        .abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(text: &str, left: Coord, bottom: Coord, right: Coord, top: Coord) -> Glyph {
        Glyph {
            text: text.into(),
            left,
            bottom,
            right,
            top,
            page: 0,
        }
    }

    #[test]
    fn anchor_is_bottom_left() {
        let glyph = g("x", 10, 40, 18, 28);
        assert_eq!(glyph.anchor(), [10, 40]);
        let p = glyph.clone().into_point();
        assert_eq!(p.coords(), &[10, 40]);
        assert_eq!(p.payload(), &glyph);
    }

    #[test]
    fn bounds_are_normalized() {
        let r = g("x", 10, 40, 18, 28).bounds();
        assert_eq!(r, Rect::new(10.0, 28.0, 18.0, 40.0));
        assert_eq!(r.height(), 12.0);
    }
}
