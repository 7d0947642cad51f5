use thiserror::Error;

/// The requested margins or grid cannot give every cell at least one pixel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("Grid must have at least one row and column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("Left margin {left} + right margin {right} leaves nothing of width {width}")]
    MarginsExceedWidth { left: u32, right: u32, width: u32 },
    #[error("Top margin {top} + bottom margin {bottom} leaves nothing of height {height}")]
    MarginsExceedHeight { top: u32, bottom: u32, height: u32 },
    #[error("Drawable width {drawable} is too narrow for {cols} columns")]
    TileTooNarrow { drawable: u32, cols: u32 },
    #[error("Drawable height {drawable} is too short for {rows} rows")]
    TileTooShort { drawable: u32, rows: u32 },
}

/// Direct pixel or region access outside the canvas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    Pixel { x: u32, y: u32, width: u32, height: u32 },
    #[error("Region ({min_x}, {min_y})-({max_x}, {max_y}) is empty or outside the {width}x{height} canvas")]
    Region {
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
        width: u32,
        height: u32,
    },
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// Either grid failure, for callers that treat them alike
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
