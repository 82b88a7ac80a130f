//! CLI output formatting for the manifest and compress commands.
//!
//! Each report has a `format_*` function (returns `Vec<String>` or `String`)
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects — so tests can assert on exact lines.
//!
//! ## Manifest
//!
//! ```text
//! Wrote client-manifests.json with 2 client(s).
//!     acme -> 3 image(s)
//!     northwind -> 1 image(s)
//! ```
//!
//! ## Compress
//!
//! ```text
//! Found 12 image(s) in images/PHOTOGRAPHY
//! Settings: max width=3000px, JPEG quality=85%
//!
//! [1/12] CLIENT/acme/a.jpg ... OK
//! [2/12] CLIENT/acme/broken.png ... SKIP
//!     Error: Failed to decode ...
//!
//! Done. Processed 11/12 successfully.
//! ```

use crate::compress::CompressReport;
use crate::imaging::Quality;
use crate::manifest::ClientManifests;
use std::path::Path;

/// Lines for the manifest command: summary plus one line per client.
pub fn format_manifest_output(manifests: &ClientManifests, output_path: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Wrote {} with {} client(s).",
        output_path.display(),
        manifests.client_count()
    )];
    for (client, images) in &manifests.0 {
        lines.push(format!("    {} -> {} image(s)", client, images.len()));
    }
    lines
}

pub fn print_manifest_output(manifests: &ClientManifests, output_path: &Path) {
    for line in format_manifest_output(manifests, output_path) {
        println!("{}", line);
    }
}

/// Header lines printed before the compress loop starts.
pub fn format_compress_header(
    root: &Path,
    total: usize,
    max_width: u32,
    quality: Quality,
) -> Vec<String> {
    vec![
        format!("Found {} image(s) in {}", total, root.display()),
        format!(
            "Settings: max width={}px, JPEG quality={}%",
            max_width,
            quality.value()
        ),
        String::new(),
    ]
}

/// Progress prefix for one file: `[3/12] CLIENT/acme/a.jpg`.
pub fn format_progress(index: usize, total: usize, rel: &Path) -> String {
    format!("[{}/{}] {}", index, total, rel.display())
}

/// Final summary line after the compress loop.
pub fn format_compress_summary(report: &CompressReport) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Done. Processed {}/{} successfully.",
            report.succeeded, report.total
        ),
    ]
}

pub fn print_compress_summary(report: &CompressReport) {
    for line in format_compress_summary(report) {
        println!("{}", line);
    }
}
