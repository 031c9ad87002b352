// File: crates/survey-figs/src/main.rs
// Summary: Renders one annotated bar chart per survey category into the output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use figs_core::{theme, BarChart, CategoryTable, OutputWriter, RenderOptions};

mod input;
mod survey;

#[derive(Parser)]
#[command(name = "survey-figs")]
#[command(about = "Render survey tabulation counts as annotated bar charts", long_about = None)]
struct Cli {
    /// Load categories from a CSV file (category,label,count) instead of the
    /// built-in survey table.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output directory for the PNG files.
    #[arg(long, default_value = figs_core::output::DEFAULT_DIR)]
    out_dir: PathBuf,

    /// Theme preset name (paper, light, dark).
    #[arg(long, default_value = "paper")]
    theme: String,

    /// Raster density in dots per inch.
    #[arg(long, default_value_t = figs_core::types::DEFAULT_DPI)]
    dpi: f32,

    /// Skip opening the rendered figures at the end of the run.
    #[arg(long)]
    no_show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table: CategoryTable = match &cli.input {
        Some(path) => input::load_table(path)
            .with_context(|| format!("failed to load table from '{}'", path.display()))?,
        None => survey::table()?,
    };

    let writer = OutputWriter::new(&cli.out_dir)?;
    let opts = RenderOptions {
        dpi: cli.dpi,
        theme: theme::find(&cli.theme),
        ..RenderOptions::default()
    };

    for category in table.iter() {
        let chart = BarChart::new(category.clone());
        let path = writer.write(&chart, &opts)?;
        println!("Wrote {}", path.display());
    }

    let resolved = writer
        .dir()
        .canonicalize()
        .unwrap_or_else(|_| writer.dir().to_path_buf());
    println!("Saved {} PNGs to: {}", table.len(), resolved.display());

    if !cli.no_show {
        show(&resolved);
    }
    Ok(())
}

/// Open the rendered figures in the system viewer. Convenience for
/// interactive runs; a headless environment just logs and moves on.
fn show(dir: &Path) {
    let url = format!("file://{}", dir.display());
    if let Err(err) = webbrowser::open(&url) {
        log::warn!("could not open viewer for {}: {}", dir.display(), err);
    }
}
