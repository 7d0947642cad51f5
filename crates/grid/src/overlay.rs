//! Border and grid overlay with per-cell views
//!
//! Lines are burned into the page in a fixed order (left, bottom, right and top
//! borders, then horizontal grid lines top to bottom, then vertical grid lines
//! left to right), so identical input gives byte-identical output.

use tracing::debug;

use crate::canvas::Canvas;
use crate::error::GeometryError;
use crate::line::draw_line;
use crate::partition::{TileGrid, compute_tile_boundaries};
use crate::types::{Color, GridShape, LineSpec, Margins, OverlayStyle, Stroke};
use crate::view::TileView;

/// An annotated page and the views of its cells
///
/// Holds the canvas by shared reference: after the overlay is drawn the page
/// is read-only for as long as any tile view is alive.
#[derive(Debug)]
pub struct CroppedPage<'a> {
    canvas: &'a Canvas,
    grid: TileGrid,
    tiles: Vec<TileView<'a>>,
}

impl<'a> CroppedPage<'a> {
    /// The page with border and grid lines drawn
    #[inline]
    pub fn canvas(&self) -> &'a Canvas {
        self.canvas
    }

    /// Geometry the tiles were cut from
    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// All tiles in row-major order
    #[inline]
    pub fn tiles(&self) -> &[TileView<'a>] {
        &self.tiles
    }

    /// Tile at (row, col)
    pub fn tile(&self, row: u32, col: u32) -> Option<&TileView<'a>> {
        let shape = self.grid.shape();
        if row >= shape.rows || col >= shape.cols {
            return None;
        }
        self.tiles.get((row as usize) * (shape.cols as usize) + col as usize)
    }

    /// Tiles grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[TileView<'a>]> {
        self.tiles.chunks(self.grid.shape().cols as usize)
    }
}

/// Draw borders and grid lines with one stroke, then cut the page into views
pub fn overlay_and_crop<'a>(
    canvas: &'a mut Canvas,
    margins: &Margins,
    shape: GridShape,
    thickness: u32,
    color: Color,
) -> Result<CroppedPage<'a>, GeometryError> {
    overlay_and_crop_styled(canvas, margins, shape, &OverlayStyle::uniform(thickness, color))
}

/// Draw borders and grid lines with separate strokes, then cut the page into views.
///
/// Geometry is validated before anything is drawn, so on error the canvas is
/// left untouched.
pub fn overlay_and_crop_styled<'a>(
    canvas: &'a mut Canvas,
    margins: &Margins,
    shape: GridShape,
    style: &OverlayStyle,
) -> Result<CroppedPage<'a>, GeometryError> {
    let grid = compute_tile_boundaries(canvas.width(), canvas.height(), margins, shape)?;

    draw_borders(canvas, margins, &style.border);
    draw_grid_lines(canvas, margins, &grid, &style.grid);

    let canvas: &'a Canvas = canvas;
    let tiles = grid
        .iter()
        .map(|boundary| TileView::new(canvas.pixels(), canvas.width(), *boundary))
        .collect();

    debug!(
        "overlay: cut {}x{} page into {} tiles of {}x{}",
        canvas.width(),
        canvas.height(),
        grid.len(),
        grid.tile_width(),
        grid.tile_height()
    );

    Ok(CroppedPage { canvas, grid, tiles })
}

/// The four margin borders, each spanning the full page
fn draw_borders(canvas: &mut Canvas, margins: &Margins, stroke: &Stroke) {
    let width = to_coord(canvas.width());
    let height = to_coord(canvas.height());
    let left = to_coord(margins.left);
    let right = width.saturating_sub(to_coord(margins.right));
    let top = to_coord(margins.top);
    let bottom = height.saturating_sub(to_coord(margins.bottom));

    let borders = [
        (left, 0, left, height),
        (0, bottom, width, bottom),
        (right, 0, right, height),
        (0, top, width, top),
    ];
    for (x1, y1, x2, y2) in borders {
        draw_line(canvas, &LineSpec::new(x1, y1, x2, y2, stroke.thickness, stroke.color));
    }
}

/// `rows + 1` horizontal and `cols + 1` vertical lines on the cell edges
fn draw_grid_lines(canvas: &mut Canvas, margins: &Margins, grid: &TileGrid, stroke: &Stroke) {
    let width = to_coord(canvas.width());
    let height = to_coord(canvas.height());

    for y in grid.row_edges(margins).map(to_coord) {
        draw_line(canvas, &LineSpec::new(0, y, width, y, stroke.thickness, stroke.color));
    }
    for x in grid.column_edges(margins).map(to_coord) {
        draw_line(canvas, &LineSpec::new(x, 0, x, height, stroke.thickness, stroke.color));
    }
}

/// Page coordinates past i32::MAX are clamped by the rasterizer anyway
#[inline]
fn to_coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileBoundary;

    fn white_page(width: u32, height: u32) -> Canvas {
        Canvas::filled(width, height, Color::WHITE).unwrap()
    }

    #[test]
    fn test_tiles_match_partition() {
        let mut canvas = white_page(900, 900);
        let margins = Margins::uniform(100);
        let page = overlay_and_crop(&mut canvas, &margins, GridShape::new(3, 3), 1, Color::BLACK).unwrap();

        assert_eq!(page.tiles().len(), 9);
        assert_eq!(page.tile(0, 0).unwrap().boundary(), TileBoundary::new(100, 100, 333, 333));
        assert_eq!(page.tile(2, 2).unwrap().boundary(), TileBoundary::new(566, 566, 799, 799));
        assert!(page.tile(3, 0).is_none());

        let rows: Vec<_> = page.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][2].boundary(), TileBoundary::new(566, 333, 799, 566));
    }

    #[test]
    fn test_right_border_outside_last_tile() {
        let mut canvas = white_page(900, 900);
        let margins = Margins::uniform(100);
        let page = overlay_and_crop(&mut canvas, &margins, GridShape::new(3, 3), 1, Color::BLACK).unwrap();
        let canvas = page.canvas();

        // Border at x = 800, last grid line at x = 799
        for y in 0..900 {
            assert_eq!(canvas.get_pixel(800, y), Ok(Color::BLACK));
            assert_eq!(canvas.get_pixel(799, y), Ok(Color::BLACK));
        }
        assert_eq!(canvas.get_pixel(801, 450), Ok(Color::WHITE));

        let last = page.tile(2, 2).unwrap();
        assert_eq!(last.boundary().max_x, 799);
        assert!(!last.boundary().contains(800, 700));
    }

    #[test]
    fn test_borders_span_page() {
        let mut canvas = white_page(200, 100);
        let margins = Margins::new(10, 20, 30, 40);
        let page = overlay_and_crop(&mut canvas, &margins, GridShape::new(1, 1), 1, Color::BLACK).unwrap();
        let canvas = page.canvas();

        for x in 0..200 {
            assert_eq!(canvas.get_pixel(x, 10), Ok(Color::BLACK));
            assert_eq!(canvas.get_pixel(x, 80), Ok(Color::BLACK));
        }
        for y in 0..100 {
            assert_eq!(canvas.get_pixel(30, y), Ok(Color::BLACK));
            assert_eq!(canvas.get_pixel(160, y), Ok(Color::BLACK));
        }
        assert_eq!(canvas.get_pixel(5, 5), Ok(Color::WHITE));
    }

    #[test]
    fn test_styled_strokes() {
        let mut canvas = white_page(300, 300);
        let red = Color::rgba(255, 0, 0, 255);
        let style = OverlayStyle {
            border: Stroke::new(1, red),
            grid: Stroke::new(3, Color::BLACK),
        };
        // Margins that do not land on grid edges: drawable 200 / 3 leaves a remainder of 2
        let margins = Margins::uniform(50);
        let page = overlay_and_crop_styled(&mut canvas, &margins, GridShape::new(3, 3), &style).unwrap();
        let canvas = page.canvas();

        // Right border at x = 250 is red, last grid line at x = 248 covers 247..=249
        assert_eq!(canvas.get_pixel(250, 10), Ok(red));
        assert_eq!(canvas.get_pixel(249, 10), Ok(Color::BLACK));
        assert_eq!(canvas.get_pixel(247, 10), Ok(Color::BLACK));
        assert_eq!(canvas.get_pixel(246, 10), Ok(Color::WHITE));
        // Grid lines are drawn after borders and win where they overlap
        assert_eq!(canvas.get_pixel(50, 10), Ok(Color::BLACK));
        assert_eq!(canvas.get_pixel(51, 10), Ok(Color::BLACK));
    }

    #[test]
    fn test_tile_views_see_overlay() {
        let mut canvas = white_page(90, 90);
        let page = overlay_and_crop(&mut canvas, &Margins::uniform(0), GridShape::new(3, 3), 1, Color::BLACK).unwrap();

        let tile = page.tile(1, 1).unwrap();
        assert_eq!(tile.width(), 30);
        assert_eq!(tile.get_pixel(0, 0), Ok(Color::BLACK));
        assert_eq!(tile.get_pixel(0, 15), Ok(Color::BLACK));
        assert_eq!(tile.get_pixel(15, 15), Ok(Color::WHITE));
        assert_eq!(tile.to_rgba8().len(), 30 * 30 * 4);
    }

    #[test]
    fn test_deterministic_output() {
        let margins = Margins::new(76, 76, 149, 149);
        let run = || {
            let mut canvas = white_page(1200, 1500);
            let page = overlay_and_crop_styled(&mut canvas, &margins, GridShape::new(3, 3), &OverlayStyle::default())
                .unwrap();
            let tiles: Vec<Vec<u8>> = page.tiles().iter().map(|t| t.to_rgba8()).collect();
            (canvas.as_bytes().to_vec(), tiles)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_geometry_error_leaves_canvas_untouched() {
        let mut canvas = white_page(100, 100);
        let before = canvas.clone();

        let result = overlay_and_crop(&mut canvas, &Margins::new(0, 0, 60, 40), GridShape::new(1, 1), 3, Color::BLACK);
        assert_eq!(
            result.unwrap_err(),
            GeometryError::MarginsExceedWidth { left: 60, right: 40, width: 100 }
        );
        assert_eq!(canvas, before);

        let result = overlay_and_crop(&mut canvas, &Margins::default(), GridShape::new(0, 1), 3, Color::BLACK);
        assert_eq!(result.unwrap_err(), GeometryError::EmptyGrid { rows: 0, cols: 1 });
        assert_eq!(canvas, before);
    }
}
