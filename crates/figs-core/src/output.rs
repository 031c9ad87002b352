// File: crates/figs-core/src/output.rs
// Summary: Output writer: fixed directory, deterministic per-category filenames.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::category::Category;
use crate::chart::{BarChart, RenderOptions};

/// Default output directory, relative to the invocation directory.
pub const DEFAULT_DIR: &str = "figs_from_table";

pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Create the output directory if absent; an existing directory is reused
    /// silently.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<stem>_bars.png` under the output directory.
    pub fn path_for(&self, category: &Category) -> PathBuf {
        self.dir.join(format!("{}_bars.png", category.file_stem()))
    }

    /// Render one chart and persist it; returns the written path.
    pub fn write(&self, chart: &BarChart, opts: &RenderOptions) -> Result<PathBuf> {
        let path = self.path_for(&chart.category);
        let bytes = chart
            .render_to_png_bytes(opts)
            .with_context(|| format!("rendering '{}'", chart.category.name()))?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("writing '{}'", path.display()))?;
        Ok(path)
    }
}
