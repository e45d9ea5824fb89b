// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for box parsing and selection.

use alloc::string::String;

use grabit_range_tree::RangeTreeError;

/// A recognizer box line that could not be turned into a [`Glyph`](crate::Glyph).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoxParseError {
    /// The line is missing a field.
    #[error("missing `{0}` field")]
    MissingField(&'static str),
    /// A numeric field did not parse as an integer.
    #[error("`{field}` is not an integer: {value:?}")]
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// Text found in its place.
        value: String,
    },
    /// The line has more fields than a box row.
    #[error("unexpected trailing field {0:?}")]
    TrailingField(String),
    /// Moving a field into screen space left the coordinate range.
    #[error("`{field}` overflows when moved into screen space")]
    CoordinateOverflow {
        /// Name of the field.
        field: &'static str,
    },
}

/// Failure of a selection against a [`GlyphIndex`](crate::GlyphIndex).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GlyphError {
    /// The underlying range query failed.
    #[error(transparent)]
    Query(#[from] RangeTreeError),
    /// A selection corner was NaN or infinite.
    #[error("selection corners must be finite")]
    NonFiniteSelection,
}
