//! cardcut - cut scanned card sheets into one image per card
//!
//! Pages must already be rasterized (one image per page). Each page gets its
//! margin borders and grid lines burned in for checking, and every grid cell
//! is written out as its own PNG.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod extract;
mod labels;
mod output;
mod settings;

use cli::Cli;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::resolve(&cli)?;
    info!(
        "grid: {}x{} cards, margins top {} bottom {} left {} right {}",
        settings.shape.rows,
        settings.shape.cols,
        settings.margins.top,
        settings.margins.bottom,
        settings.margins.left,
        settings.margins.right
    );

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("configuring worker threads")?;
    }

    let atlas = cli
        .label_atlas
        .as_deref()
        .map(|path| labels::load_atlas(path, &cli.label_glyphs))
        .transpose()?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating output directory {}", cli.output_dir.display()))?;

    let reports = extract::process_pages(&cli.pages, &settings, atlas.as_ref(), &cli.output_dir)?;
    let tiles: usize = reports.iter().map(|r| r.tiles).sum();
    info!(
        "done: {} pages, {} cards written to {}",
        reports.len(),
        tiles,
        cli.output_dir.display()
    );

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
