//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Cut rasterized card sheets into one image per card.
///
/// Each page is annotated with its margin borders and grid lines so the cut
/// can be checked by eye, then saved next to the individual cards.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Page images in order; the first is page 1
    #[arg(required = true)]
    pub pages: Vec<PathBuf>,

    /// Directory for the annotated pages and card images
    #[arg(short, long, default_value = "images")]
    pub output_dir: PathBuf,

    /// JSON extraction config (falls back to $CARDCUT_CONFIG, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of card rows per page
    #[arg(long)]
    pub rows: Option<u32>,

    /// Override the number of card columns per page
    #[arg(long)]
    pub cols: Option<u32>,

    /// Worker threads for page processing (defaults to one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Glyph strip used to number the tiles on the annotated page
    #[arg(long)]
    pub label_atlas: Option<PathBuf>,

    /// Characters in the glyph strip, left to right
    #[arg(long, default_value = "0123456789")]
    pub label_glyphs: String,

    /// Log geometry details
    #[arg(short, long)]
    pub verbose: bool,
}
