//! Read-only views of single grid cells

use crate::error::BoundsError;
use crate::types::{Color, TileBoundary};

/// A borrowed window onto one cell of a [`Canvas`](crate::canvas::Canvas)
///
/// Shares storage with the canvas, no pixels are copied until
/// [`TileView::to_rgba8`] is called.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    pixels: &'a [Color],
    stride: u32,
    boundary: TileBoundary,
}

impl<'a> TileView<'a> {
    /// `boundary` must already be checked against the canvas dimensions
    pub(crate) fn new(pixels: &'a [Color], stride: u32, boundary: TileBoundary) -> Self {
        Self { pixels, stride, boundary }
    }

    /// Extent of this view in canvas coordinates
    #[inline]
    pub fn boundary(&self) -> TileBoundary {
        self.boundary
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.boundary.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.boundary.height()
    }

    /// Get a pixel in tile-local coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, BoundsError> {
        if x >= self.width() || y >= self.height() {
            return Err(BoundsError::Pixel {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.row_unchecked(y)[x as usize])
    }

    /// One row of the tile, `y` in tile-local coordinates
    pub fn row(&self, y: u32) -> Option<&'a [Color]> {
        (y < self.height()).then(|| self.row_unchecked(y))
    }

    /// Rows of the tile, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [Color]> + 'a {
        let view = *self;
        (0..view.height()).map(move |y| view.row_unchecked(y))
    }

    /// `y` must be below `height()`; the boundary was checked against the
    /// canvas when the view was made
    fn row_unchecked(&self, y: u32) -> &'a [Color] {
        let pixels: &'a [Color] = self.pixels;
        let start = ((self.boundary.min_y + y) as usize) * (self.stride as usize) + self.boundary.min_x as usize;
        &pixels[start..start + self.width() as usize]
    }

    /// Copy the tile into an independent, tightly packed RGBA8 buffer
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width() as usize) * (self.height() as usize) * 4);
        for row in self.rows() {
            data.extend_from_slice(bytemuck::cast_slice(row));
        }
        data
    }
}
