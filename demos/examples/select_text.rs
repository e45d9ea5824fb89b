// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text selection over recognized character boxes.
//!
//! Parse per-tile recognizer output for a small capture, index the glyphs, and
//! answer a few drag selections the way an overlay would.
//!
//! Run:
//! - `cargo run -p grabit_demos --example select_text`
//! - `RUST_LOG=debug cargo run -p grabit_demos --example select_text`

use grabit_glyphs::{GlyphError, GlyphIndex, ParsedBoxes, TileGrid};
use kurbo::Point;
use tracing_subscriber::EnvFilter;

// A 240x60 capture recognized as two 120x60 tiles. Rows are
// `<text> <left> <bottom> <right> <top> <page>` with y measured upward.
const LEFT_TILE: &str = "\
H 10 40 18 52 0
e 20 40 27 49 0
l 30 40 33 52 0
l 36 40 39 52 0
o 42 40 49 49 0
w 10 10 19 19 0
o 22 10 29 19 0
? 0 0 oops 0 0
";
const RIGHT_TILE: &str = "\
t 0 40 5 50 0
h 8 40 15 52 0
e 18 40 25 49 0
r 10 10 15 19 0
e 18 10 25 19 0
";

fn main() -> Result<(), GlyphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let grid = TileGrid::new(240, 60).with_tile_size(120, 60);
    let mut parsed = ParsedBoxes::default();
    for (tile, rows) in grid.tiles().zip([LEFT_TILE, RIGHT_TILE]) {
        parsed.extend_from_text(rows, &tile);
    }
    for rejected in &parsed.rejected {
        println!("line {} skipped: {}", rejected.line, rejected.error);
    }

    let index = GlyphIndex::from(parsed);
    println!("indexed {} glyphs", index.len());

    let drags = [
        ("everything", Point::new(0.0, 0.0), Point::new(240.0, 60.0)),
        ("top line", Point::new(240.0, 0.0), Point::new(0.0, 30.0)),
        ("bottom right", Point::new(120.0, 60.0), Point::new(240.0, 30.0)),
        ("empty margin", Point::new(60.0, 0.0), Point::new(110.0, 60.0)),
    ];
    for (name, start, end) in drags {
        let selection = index.select(start, end)?;
        if selection.is_empty() {
            println!("{name}: no text in region");
            continue;
        }
        println!("{name}: {:?}", selection.text());
        if let Some(bounds) = selection.bounds() {
            println!("  highlight {} boxes within {bounds:?}", selection.len());
        }
    }
    Ok(())
}
