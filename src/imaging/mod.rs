//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Normalize** | alpha flatten onto white, 8-bit conversion |
//! | **Downscale** | Lanczos3, width capped, aspect preserved |
//! | **Encode** | JPEG / PNG via the `image` crate, lossy WebP via libwebp |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_width;
pub use params::{OptimizeParams, OutputFormat, Quality};
pub use rust_backend::RustBackend;
