//! Owned RGBA8 page buffer

use crate::error::{BoundsError, GeometryError, GridError};
use crate::types::{Color, TileBoundary};
use crate::view::TileView;

/// A full page of RGBA8 pixels in row-major order
///
/// The canvas is mutated in place by the line rasterizer. Once tile views have
/// been taken from it the borrow checker keeps it read-only until they drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas initialized to transparent black
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a canvas filled with a solid color
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyCanvas { width, height });
        }
        let pixel_count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            pixels: vec![color; pixel_count],
        })
    }

    /// Wrap a decoded RGBA8 raster (4 bytes per pixel, row-major)
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyCanvas { width, height }.into());
        }
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(BoundsError::BufferLength {
                expected,
                actual: data.len(),
            }
            .into());
        }
        let pixels = data
            .chunks_exact(4)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self { width, height, pixels })
    }

    /// Give the pixels back as a flat RGBA8 buffer for encoding
    pub fn into_rgba8(self) -> Vec<u8> {
        bytemuck::cast_slice(&self.pixels).to_vec()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel, failing outside the canvas
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, BoundsError> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    /// Set a pixel, failing outside the canvas
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), BoundsError> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Set a pixel given signed coordinates, silently skipping anything outside.
    /// Returns whether the pixel was written.
    #[inline]
    pub(crate) fn put_clipped(&mut self, x: i64, y: i64, color: Color) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
        true
    }

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)` after clipping it to
    /// the canvas. Returns the number of pixels written.
    pub(crate) fn fill_rect_clipped(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) -> usize {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(i64::from(self.width) - 1);
        let y1 = y1.min(i64::from(self.height) - 1);
        if x0 > x1 || y0 > y1 {
            return 0;
        }
        let stride = self.width as usize;
        let (x0, x1) = (x0 as usize, x1 as usize);
        for y in y0 as usize..=y1 as usize {
            self.pixels[y * stride + x0..=y * stride + x1].fill(color);
        }
        (x1 - x0 + 1) * ((y1 - y0 + 1) as usize)
    }

    /// Fill the whole canvas with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Borrow a read-only view restricted to `boundary`
    pub fn view(&self, boundary: TileBoundary) -> Result<TileView<'_>, BoundsError> {
        if boundary.is_empty() || boundary.max_x > self.width || boundary.max_y > self.height {
            return Err(BoundsError::Region {
                min_x: boundary.min_x,
                min_y: boundary.min_y,
                max_x: boundary.max_x,
                max_y: boundary.max_y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(TileView::new(&self.pixels, self.width, boundary))
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Result<usize, BoundsError> {
        if x >= self.width || y >= self.height {
            return Err(BoundsError::Pixel {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }
}
