//! File naming and PNG persistence

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::RgbaImage;

/// Annotated page file, `page` is 1-based
pub fn page_file_name(page: usize) -> String {
    format!("page_{:02}.png", page)
}

/// Single card file, all numbers 1-based
pub fn tile_file_name(page: usize, row: u32, col: u32) -> String {
    format!("page_{:02}_row_{:02}_col_{:02}.png", page, row, col)
}

/// Encode a tightly packed RGBA8 buffer to `path`
pub fn save_rgba(path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> Result<()> {
    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow!("buffer does not hold a {}x{} RGBA image", width, height))?;
    image
        .save(path)
        .with_context(|| format!("saving {}", path.display()))
}
