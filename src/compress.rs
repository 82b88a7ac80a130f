//! Batch image compression.
//!
//! Walks the photography root recursively and re-encodes every image in
//! place: color-normalized, downscaled to the width cap when wider, and
//! saved with fixed quality settings. Originals are overwritten — there is
//! no processing cache and no record of "already compressed", so a second
//! run re-encodes everything.
//!
//! ## Failure semantics
//!
//! A file that fails anywhere in decode → normalize → resize → encode is
//! reported and skipped; the run continues with the next file. There is no
//! rollback: a failure mid-write can leave that one file corrupted.
//!
//! ## Ordering
//!
//! Files are processed strictly sequentially in sorted path order, so
//! progress output is stable across runs.

use crate::imaging::{ImageBackend, OptimizeParams, Quality};
use crate::output;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Default photography root, relative to the site checkout.
pub const PHOTOGRAPHY_ROOT: &str = "images/PHOTOGRAPHY";

/// Images wider than this are downscaled proportionally.
pub const MAX_WIDTH: u32 = 3000;

/// Extensions the compressor will touch.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "jpe", "png", "webp"];

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a compression run.
#[derive(Debug, Default)]
pub struct CompressReport {
    pub total: usize,
    pub succeeded: usize,
    /// Files that were skipped, with the error that caused it.
    pub failures: Vec<(PathBuf, String)>,
}

/// Enumerate image files under `root`, sorted by full path.
///
/// A missing root is fatal — the compressor never creates directories.
pub fn collect_images(root: &Path) -> Result<Vec<PathBuf>, CompressError> {
    if !root.is_dir() {
        return Err(CompressError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Compress every image under `root` in place, printing per-file progress.
pub fn run(
    backend: &impl ImageBackend,
    root: &Path,
    quality: Quality,
    max_width: u32,
) -> Result<CompressReport, CompressError> {
    let files = collect_images(root)?;
    let total = files.len();

    if total == 0 {
        println!("No image files found in {}", root.display());
        return Ok(CompressReport::default());
    }

    for line in output::format_compress_header(root, total, max_width, quality) {
        println!("{}", line);
    }

    let mut report = CompressReport {
        total,
        ..CompressReport::default()
    };

    for (i, path) in files.iter().enumerate() {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let prefix = output::format_progress(i + 1, total, rel);

        let result = backend.optimize(&OptimizeParams {
            source: path.clone(),
            max_width,
            quality,
        });

        match result {
            Ok(()) => {
                println!("{} ... OK", prefix);
                report.succeeded += 1;
            }
            Err(e) => {
                println!("{} ... SKIP", prefix);
                println!("    Error: {}", e);
                report.failures.push((rel.to_path_buf(), e.to_string()));
            }
        }
    }

    Ok(report)
}
