use crate::constants::{DEFAULT_BORDER_THICKNESS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_GRID_THICKNESS};

/// An 8-bit RGBA color
///
/// Laid out as four consecutive bytes so a `&[Color]` can be handed to an
/// encoder as raw RGBA8 with bytemuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::from_array(c)
    }
}

/// Pixel insets excluded from the grid on each side of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Same inset on all four sides
    pub const fn uniform(inset: u32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Number of rows and columns of cards on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS)
    }
}

/// Half-open pixel rectangle of one grid cell: `[min_x, max_x) x [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileBoundary {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl TileBoundary {
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Whether the boundary covers at least one pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Whether the point lies inside the half-open rectangle
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

/// A straight line request. Endpoints may lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Total stroke width in pixels
    pub thickness: u32,
    pub color: Color,
}

impl LineSpec {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32, thickness: u32, color: Color) -> Self {
        Self { x1, y1, x2, y2, thickness, color }
    }
}

/// Thickness and color of one class of overlay line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub thickness: u32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(thickness: u32, color: Color) -> Self {
        Self { thickness, color }
    }
}

/// Strokes used for the margin borders and the grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub border: Stroke,
    pub grid: Stroke,
}

impl OverlayStyle {
    /// Borders and grid lines drawn with the same stroke
    pub const fn uniform(thickness: u32, color: Color) -> Self {
        let stroke = Stroke::new(thickness, color);
        Self { border: stroke, grid: stroke }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border: Stroke::new(DEFAULT_BORDER_THICKNESS, Color::BLACK),
            grid: Stroke::new(DEFAULT_GRID_THICKNESS, Color::BLACK),
        }
    }
}
