//! Tile geometry inside the page margins
//!
//! Cell sizes come from floor division of the drawable area, so when the area
//! does not split evenly the last row and column stop short of the margin
//! border by the remainder. That gap is reproduced as-is, not rounded away.

use tracing::debug;

use crate::error::GeometryError;
use crate::types::{GridShape, Margins, TileBoundary};

/// Row-major boundaries of every cell on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    shape: GridShape,
    tile_width: u32,
    tile_height: u32,
    remainder: (u32, u32),
    boundaries: Vec<TileBoundary>,
}

impl TileGrid {
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    #[inline]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Drawable pixels left uncovered by the last column and row, as (x, y)
    #[inline]
    pub fn remainder(&self) -> (u32, u32) {
        self.remainder
    }

    /// Boundary of the cell at (row, col)
    pub fn get(&self, row: u32, col: u32) -> Option<&TileBoundary> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        self.boundaries.get((row as usize) * (self.shape.cols as usize) + col as usize)
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &TileBoundary> {
        self.boundaries.iter()
    }

    /// Cells grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[TileBoundary]> {
        self.boundaries.chunks(self.shape.cols as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// x coordinate of every vertical grid line, left to right (`cols + 1` values)
    pub fn column_edges(&self, margins: &Margins) -> impl Iterator<Item = u32> {
        let (left, width) = (margins.left, self.tile_width);
        (0..=self.shape.cols).map(move |i| left + i * width)
    }

    /// y coordinate of every horizontal grid line, top to bottom (`rows + 1` values)
    pub fn row_edges(&self, margins: &Margins) -> impl Iterator<Item = u32> {
        let (top, height) = (margins.top, self.tile_height);
        (0..=self.shape.rows).map(move |i| top + i * height)
    }
}

/// Split the area inside `margins` into `shape.rows x shape.cols` equal cells.
///
/// Cell (r, c) spans `left + c*tile_width .. left + (c+1)*tile_width` and
/// `top + r*tile_height .. top + (r+1)*tile_height`, with both tile sizes
/// floor divided.
pub fn compute_tile_boundaries(
    width: u32,
    height: u32,
    margins: &Margins,
    shape: GridShape,
) -> Result<TileGrid, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::EmptyCanvas { width, height });
    }
    if shape.rows == 0 || shape.cols == 0 {
        return Err(GeometryError::EmptyGrid {
            rows: shape.rows,
            cols: shape.cols,
        });
    }

    let drawable_width = margins
        .left
        .checked_add(margins.right)
        .and_then(|used| width.checked_sub(used))
        .filter(|&w| w > 0)
        .ok_or(GeometryError::MarginsExceedWidth {
            left: margins.left,
            right: margins.right,
            width,
        })?;
    let drawable_height = margins
        .top
        .checked_add(margins.bottom)
        .and_then(|used| height.checked_sub(used))
        .filter(|&h| h > 0)
        .ok_or(GeometryError::MarginsExceedHeight {
            top: margins.top,
            bottom: margins.bottom,
            height,
        })?;

    let tile_width = drawable_width / shape.cols;
    if tile_width == 0 {
        return Err(GeometryError::TileTooNarrow {
            drawable: drawable_width,
            cols: shape.cols,
        });
    }
    let tile_height = drawable_height / shape.rows;
    if tile_height == 0 {
        return Err(GeometryError::TileTooShort {
            drawable: drawable_height,
            rows: shape.rows,
        });
    }

    let remainder = (drawable_width % shape.cols, drawable_height % shape.rows);
    debug!(
        "partition: {}x{} page, drawable {}x{}, tile {}x{}",
        width, height, drawable_width, drawable_height, tile_width, tile_height
    );
    if remainder != (0, 0) {
        debug!(
            "partition: grid leaves {}px right and {}px bottom uncovered before the margin border",
            remainder.0, remainder.1
        );
    }

    let mut boundaries = Vec::with_capacity(shape.cell_count());
    for row in 0..shape.rows {
        let min_y = margins.top + row * tile_height;
        for col in 0..shape.cols {
            let min_x = margins.left + col * tile_width;
            boundaries.push(TileBoundary::new(min_x, min_y, min_x + tile_width, min_y + tile_height));
        }
    }

    Ok(TileGrid {
        shape,
        tile_width,
        tile_height,
        remainder,
        boundaries,
    })
}
