//! Per-page pipeline: decode, overlay, cut and persist

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grid::annotate::GlyphAtlas;
use grid::{Canvas, GeometryError, TileBoundary, overlay_and_crop_styled};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::labels::label_tiles;
use crate::output::{page_file_name, save_rgba, tile_file_name};
use crate::settings::Settings;

/// An independent copy of one cell, ready to encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    /// 0-based grid position
    pub row: u32,
    pub col: u32,
    pub boundary: TileBoundary,
    pub rgba: Vec<u8>,
}

/// What was written for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReport {
    pub page: usize,
    pub tiles: usize,
}

/// Decode a page raster into a canvas
pub fn load_page(path: &Path) -> Result<Canvas> {
    let image = image::open(path)
        .with_context(|| format!("opening page {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Canvas::from_rgba8(width, height, image.into_raw())
        .with_context(|| format!("wrapping page {}", path.display()))
}

/// Burn the overlay into `canvas` and copy out every tile.
///
/// The tile views only live inside this call, so the canvas is free for
/// further annotation once it returns.
pub fn cut_page(canvas: &mut Canvas, settings: &Settings) -> Result<Vec<TileImage>, GeometryError> {
    let page = overlay_and_crop_styled(canvas, &settings.margins, settings.shape, &settings.style)?;
    let cols = settings.shape.cols;
    let tiles = page
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, view)| TileImage {
            row: i as u32 / cols,
            col: i as u32 % cols,
            boundary: view.boundary(),
            rgba: view.to_rgba8(),
        })
        .collect();
    Ok(tiles)
}

/// Run one page end to end, writing its tiles and the annotated page
pub fn process_page(
    page: usize,
    path: &Path,
    settings: &Settings,
    labels: Option<&GlyphAtlas>,
    output_dir: &Path,
) -> Result<PageReport> {
    let _span = info_span!("page", page).entered();

    let mut canvas = load_page(path)?;
    info!("page: {:2}: {:6}x{:6}", page, canvas.width(), canvas.height());

    let tiles = cut_page(&mut canvas, settings)
        .with_context(|| format!("page {}: cutting {}", page, path.display()))?;

    let count = tiles.len();
    let boundaries: Vec<TileBoundary> = tiles.iter().map(|t| t.boundary).collect();
    for tile in tiles {
        let tile_path = output_dir.join(tile_file_name(page, tile.row + 1, tile.col + 1));
        debug!("tile: {} from {:?}", tile_path.display(), tile.boundary);
        save_rgba(&tile_path, tile.boundary.width(), tile.boundary.height(), tile.rgba)?;
    }

    if let Some(atlas) = labels {
        label_tiles(&mut canvas, atlas, &boundaries);
    }

    let page_path = output_dir.join(page_file_name(page));
    let (width, height) = (canvas.width(), canvas.height());
    save_rgba(&page_path, width, height, canvas.into_rgba8())?;

    Ok(PageReport { page, tiles: count })
}

/// Process every page in parallel, numbered from 1 in input order.
/// Stops at the first page that fails.
pub fn process_pages(
    pages: &[PathBuf],
    settings: &Settings,
    labels: Option<&GlyphAtlas>,
    output_dir: &Path,
) -> Result<Vec<PageReport>> {
    pages
        .par_iter()
        .enumerate()
        .map(|(i, path)| process_page(i + 1, path, settings, labels, output_dir))
        .collect()
}
