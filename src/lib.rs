//! # photosite
//!
//! Utility toolbox for a static photography website. The site itself is plain
//! HTML and CSS checked into the repository; this binary covers the three
//! chores around it:
//!
//! ```text
//! 1. manifest   images/PHOTOGRAPHY/CLIENT/  →  client-manifests.json
//! 2. compress   images/PHOTOGRAPHY/**       →  re-encoded in place
//! 3. serve      site root                   →  http://127.0.0.1:3000 + reload
//! ```
//!
//! The three commands are fully independent: no data or control flow passes
//! between them, and each runs once and exits (the server until interrupted).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | One-level scan of client folders → deterministic JSON mapping |
//! | [`compress`] | Recursive walk + per-file optimize with skip-and-continue |
//! | [`serve`] | Static dev server with file-watch-driven browser reload |
//! | [`imaging`] | Pixel work: decode, alpha flatten, Lanczos3 downscale, encode |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## In-Place Compression, No Cache
//!
//! The compressor overwrites originals and keeps no record of prior runs.
//! Re-encoding an already-compressed JPEG at the same settings is close to a
//! no-op visually, and the photography tree is small enough that a full pass
//! is cheap. This keeps the tool stateless: no sidecar files, no database.
//!
//! ## Backend Seam
//!
//! Pixel operations sit behind the [`imaging::ImageBackend`] trait. The batch
//! loop in [`compress`] is tested against a recording mock, so its ordering
//! and skip-and-continue behavior are verified without encoding a single
//! image.
//!
//! ## Delegated Hot Reload
//!
//! The dev server contributes no reload protocol of its own:
//! `tower-livereload` injects the client script and owns the connections,
//! `notify` reports filesystem changes, and [`serve`] forwards one to the
//! other for `*.html` and `*.css` paths.

pub mod compress;
pub mod imaging;
pub mod manifest;
pub mod output;
pub mod serve;
