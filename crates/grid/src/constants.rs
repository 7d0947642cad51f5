/// Stroke width for the four margin border lines.
pub const DEFAULT_BORDER_THICKNESS: u32 = 1;

/// Stroke width for the interior grid lines.
pub const DEFAULT_GRID_THICKNESS: u32 = 3;

/// Rows and columns on a print-and-play sheet.
pub const DEFAULT_GRID_ROWS: u32 = 3;
pub const DEFAULT_GRID_COLS: u32 = 3;

/// Alpha at or above which an atlas pixel counts as ink.
pub const GLYPH_INK_THRESHOLD: u8 = 128;
