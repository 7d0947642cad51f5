//! Grid extraction engine - margins, tiles and overlay lines for scanned card sheets
//!
//! This crate provides the core of the card cutter:
//! - [`canvas::Canvas`] - Owned RGBA8 page buffer with bounds-checked access
//! - [`view::TileView`] - Borrowed, read-only view of one grid cell
//! - [`line`] - Clipped, square-capped thick line rasterizer
//! - [`partition`] - Integer tile geometry inside the page margins
//! - [`overlay`] - Border and grid overlay plus per-cell views
//! - [`annotate`] - Glyph atlas text stamping for page labels
//!
//! Nothing here touches the filesystem. Decoding page rasters and persisting
//! tiles is left to the caller.

pub mod annotate;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod line;
pub mod overlay;
pub mod partition;
pub mod types;
pub mod view;

pub use canvas::*;
pub use constants::*;
pub use error::*;
pub use line::*;
pub use overlay::*;
pub use partition::*;
pub use types::*;
pub use view::*;
