//! Client manifest generation.
//!
//! Scans the client image root one level deep and writes
//! `client-manifests.json` — a mapping from each client folder name to the
//! sorted list of image filenames inside it. The photography page reads this
//! file to know which images to display, so it must be regenerated after
//! adding or removing photos in any client folder.
//!
//! ## Directory structure
//!
//! ```text
//! images/PHOTOGRAPHY/CLIENT/        # Client root
//! ├── acme/                         # One folder per client
//! │   ├── a.JPG
//! │   └── b.png
//! └── northwind/
//!     └── launch.webp
//! ```
//!
//! produces:
//!
//! ```json
//! {
//!   "acme": ["a.JPG", "b.png"],
//!   "northwind": ["launch.webp"]
//! }
//! ```
//!
//! ## Rules
//!
//! - Only immediate subdirectories become manifest keys; hidden directories
//!   (leading `.`) are skipped, as are plain files in the client root.
//! - List entries are filenames, not paths, filtered by extension
//!   (case-insensitive) and sorted lexicographically.
//! - The output is fully regenerated on every run — no merging.
//! - A missing client root is created and yields an empty mapping.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default client root, relative to the site checkout.
pub const CLIENT_ROOT: &str = "images/PHOTOGRAPHY/CLIENT";

/// Default output file, written at the site root.
pub const MANIFEST_FILE: &str = "client-manifests.json";

/// Extensions the photography page can display.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mapping from client folder name to its sorted image filenames.
///
/// Backed by a `BTreeMap` so key order — and therefore the serialized JSON —
/// is deterministic: two runs over an unchanged tree produce identical bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ClientManifests(pub BTreeMap<String, Vec<String>>);

impl ClientManifests {
    pub fn client_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scan the client root one level deep.
///
/// If the root does not exist it is created and an empty mapping is returned.
pub fn build(client_root: &Path) -> Result<ClientManifests, ManifestError> {
    if !client_root.is_dir() {
        fs::create_dir_all(client_root)?;
        return Ok(ClientManifests::default());
    }

    let mut manifests = BTreeMap::new();
    for entry in fs::read_dir(client_root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        manifests.insert(name, list_images(&entry.path())?);
    }

    Ok(ClientManifests(manifests))
}

/// List displayable image filenames in one client folder, sorted.
fn list_images(dir: &Path) -> Result<Vec<String>, ManifestError> {
    let mut files: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_image(&e.path()))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

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

/// Overwrite `path` with the full mapping as 2-space-indented JSON.
pub fn write(manifests: &ClientManifests, path: &Path) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(manifests)?;
    fs::write(path, json)?;
    Ok(())
}
