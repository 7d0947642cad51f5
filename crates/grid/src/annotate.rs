//! Label stamping from a pre-rendered glyph atlas
//!
//! Kept apart from the geometry engine: nothing here knows about margins or
//! tiles, it only puts glyph masks onto a canvas at an anchored position.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::canvas::Canvas;
use crate::constants::GLYPH_INK_THRESHOLD;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("Glyph atlas has no glyphs or no pixels")]
    Empty,
    #[error("Atlas buffer holds {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("Atlas width {width} does not split into {glyphs} equal cells")]
    UnevenStrip { width: u32, glyphs: usize },
}

/// Horizontal placement of text relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of text relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl Anchor {
    pub const fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        Self { horizontal, vertical }
    }
}

/// Monospaced one-bit glyph masks keyed by character
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    cell_width: u32,
    cell_height: u32,
    masks: HashMap<char, Vec<bool>>,
}

impl GlyphAtlas {
    /// Build an atlas from a horizontal strip of equally wide cells, one per
    /// character of `glyphs` in order. A pixel is ink when its alpha reaches
    /// [`GLYPH_INK_THRESHOLD`].
    pub fn from_strip(width: u32, height: u32, rgba: &[u8], glyphs: &str) -> Result<Self, AtlasError> {
        let count = glyphs.chars().count();
        if count == 0 || width == 0 || height == 0 {
            return Err(AtlasError::Empty);
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(AtlasError::BufferLength {
                expected,
                actual: rgba.len(),
            });
        }
        if width as usize % count != 0 {
            return Err(AtlasError::UnevenStrip { width, glyphs: count });
        }

        let cell_width = width / count as u32;
        let mut masks = HashMap::with_capacity(count);
        for (i, ch) in glyphs.chars().enumerate() {
            let origin = i as u32 * cell_width;
            let mut mask = Vec::with_capacity((cell_width * height) as usize);
            for y in 0..height {
                for x in origin..origin + cell_width {
                    let alpha = rgba[((y * width + x) as usize) * 4 + 3];
                    mask.push(alpha >= GLYPH_INK_THRESHOLD);
                }
            }
            masks.insert(ch, mask);
        }

        Ok(Self {
            cell_width,
            cell_height: height,
            masks,
        })
    }

    #[inline]
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn contains(&self, ch: char) -> bool {
        self.masks.contains_key(&ch)
    }

    /// Pixel size of `text` when stamped
    pub fn measure(&self, text: &str) -> (u32, u32) {
        (self.cell_width * text.chars().count() as u32, self.cell_height)
    }
}

/// Stamp `text` onto the canvas anchored at (x, y).
///
/// Every pixel is clipped to the canvas on its own. Characters missing from the
/// atlas leave a blank cell. Returns the number of pixels painted.
pub fn draw_text(
    canvas: &mut Canvas,
    atlas: &GlyphAtlas,
    text: &str,
    x: i32,
    y: i32,
    anchor: Anchor,
    color: Color,
) -> usize {
    let (text_width, text_height) = atlas.measure(text);
    let (text_width, text_height) = (i64::from(text_width), i64::from(text_height));

    let left = match anchor.horizontal {
        HorizontalAnchor::Left => i64::from(x),
        HorizontalAnchor::Center => i64::from(x) - text_width / 2,
        HorizontalAnchor::Right => i64::from(x) - text_width,
    };
    let top = match anchor.vertical {
        VerticalAnchor::Top => i64::from(y),
        VerticalAnchor::Middle => i64::from(y) - text_height / 2,
        VerticalAnchor::Bottom => i64::from(y) - text_height,
    };

    let cell_width = i64::from(atlas.cell_width);
    let mut painted = 0;
    for (i, ch) in text.chars().enumerate() {
        let Some(mask) = atlas.masks.get(&ch) else {
            warn!("draw_text: no glyph for {:?}, leaving a blank cell", ch);
            continue;
        };
        let origin_x = left + i as i64 * cell_width;
        for (j, &ink) in mask.iter().enumerate() {
            if !ink {
                continue;
            }
            let gx = (j as i64) % cell_width;
            let gy = (j as i64) / cell_width;
            if canvas.put_clipped(origin_x + gx, top + gy, color) {
                painted += 1;
            }
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2-glyph strip, 3x2 cells: "a" is fully inked, "b" has only its top-left pixel
    fn strip() -> GlyphAtlas {
        let width = 6;
        let height = 2;
        let mut rgba = vec![0u8; width * height * 4];
        for y in 0..height {
            for x in 0..3 {
                rgba[(y * width + x) * 4 + 3] = 255;
            }
        }
        rgba[3 * 4 + 3] = 200;
        GlyphAtlas::from_strip(width as u32, height as u32, &rgba, "ab").unwrap()
    }

    #[test]
    fn test_from_strip() {
        let atlas = strip();
        assert_eq!(atlas.cell_width(), 3);
        assert_eq!(atlas.cell_height(), 2);
        assert!(atlas.contains('a') && atlas.contains('b'));
        assert!(!atlas.contains('c'));
        assert_eq!(atlas.measure("abba"), (12, 2));
    }

    #[test]
    fn test_from_strip_errors() {
        assert_eq!(GlyphAtlas::from_strip(4, 1, &[0; 16], "").unwrap_err(), AtlasError::Empty);
        assert_eq!(
            GlyphAtlas::from_strip(4, 1, &[0; 12], "ab").unwrap_err(),
            AtlasError::BufferLength { expected: 16, actual: 12 }
        );
        assert_eq!(
            GlyphAtlas::from_strip(5, 1, &[0; 20], "ab").unwrap_err(),
            AtlasError::UnevenStrip { width: 5, glyphs: 2 }
        );
    }

    #[test]
    fn test_draw_text_top_left() {
        let atlas = strip();
        let mut canvas = Canvas::new(10, 10).unwrap();
        let painted = draw_text(&mut canvas, &atlas, "ab", 1, 1, Anchor::default(), Color::WHITE);

        assert_eq!(painted, 7);
        assert_eq!(canvas.get_pixel(1, 1), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(3, 2), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(4, 1), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(5, 1), Ok(Color::TRANSPARENT));
        assert_eq!(canvas.get_pixel(4, 2), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn test_draw_text_right_middle_anchor() {
        let atlas = strip();
        let mut canvas = Canvas::new(10, 10).unwrap();
        let anchor = Anchor::new(HorizontalAnchor::Right, VerticalAnchor::Middle);
        draw_text(&mut canvas, &atlas, "a", 9, 5, anchor, Color::WHITE);

        // 3x2 glyph ends just left of x = 9 and straddles y = 5
        assert_eq!(canvas.get_pixel(6, 4), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(8, 5), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(9, 5), Ok(Color::TRANSPARENT));
        assert_eq!(canvas.get_pixel(6, 6), Ok(Color::TRANSPARENT));
    }

    #[test]
    fn test_draw_text_clips_and_skips_unknown() {
        let atlas = strip();
        let mut canvas = Canvas::new(4, 4).unwrap();
        let painted = draw_text(&mut canvas, &atlas, "?a", -4, -1, Anchor::default(), Color::WHITE);

        // "?" is blank; "a" starts at x = -1, y = -1 so only a 2x1 corner lands
        assert_eq!(painted, 2);
        assert_eq!(canvas.get_pixel(0, 0), Ok(Color::WHITE));
        assert_eq!(canvas.get_pixel(1, 0), Ok(Color::WHITE));
    }
}
