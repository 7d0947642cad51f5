//! Tile numbers stamped onto the annotated page

use std::path::Path;

use anyhow::{Context, Result};
use grid::annotate::{Anchor, GlyphAtlas, draw_text};
use grid::{Canvas, Color, TileBoundary};

/// Gap between a tile's top-left corner and its number
const LABEL_INSET: i32 = 8;

const LABEL_COLOR: Color = Color::rgba(255, 0, 0, 255);

/// Load a horizontal glyph strip image
pub fn load_atlas(path: &Path, glyphs: &str) -> Result<GlyphAtlas> {
    let strip = image::open(path)
        .with_context(|| format!("opening glyph atlas {}", path.display()))?
        .to_rgba8();
    let (width, height) = strip.dimensions();
    GlyphAtlas::from_strip(width, height, strip.as_raw(), glyphs)
        .with_context(|| format!("building glyph atlas from {}", path.display()))
}

/// Number tiles 1.. in row-major order, each label just inside its tile
pub fn label_tiles<'a>(
    canvas: &mut Canvas,
    atlas: &GlyphAtlas,
    boundaries: impl IntoIterator<Item = &'a TileBoundary>,
) {
    for (index, boundary) in boundaries.into_iter().enumerate() {
        let x = i32::try_from(boundary.min_x).unwrap_or(i32::MAX).saturating_add(LABEL_INSET);
        let y = i32::try_from(boundary.min_y).unwrap_or(i32::MAX).saturating_add(LABEL_INSET);
        draw_text(canvas, atlas, &(index + 1).to_string(), x, y, Anchor::default(), LABEL_COLOR);
    }
}
