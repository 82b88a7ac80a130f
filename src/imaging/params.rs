//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`compress`](crate::compress) (which decides which files
//! to touch) and the [`backend`](super::backend) (which does the actual pixel
//! work). This separation allows swapping backends (e.g. for testing with a
//! mock) without changing the batch loop.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(85)
    }
}

/// Encoder selected from a file's extension.
///
/// The extension set the compressor walks is fixed (`jpg`, `jpeg`, `jpe`,
/// `png`, `webp`); anything in that set that is not PNG or WebP re-encodes as
/// JPEG, and JPEG is also the fallback for an unrecognized extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Map an extension to its encoder. Matching is ASCII case-insensitive.
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("png") {
            OutputFormat::Png
        } else if ext.eq_ignore_ascii_case("webp") {
            OutputFormat::WebP
        } else {
            OutputFormat::Jpeg
        }
    }
}

/// Full specification for an in-place optimize: decode, normalize color,
/// downscale to `max_width` if wider, re-encode over `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeParams {
    pub source: PathBuf,
    /// Maximum output width in pixels; wider images are downscaled.
    pub max_width: u32,
    pub quality: Quality,
}
