//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the compressor
//! needs: identify and optimize. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked. Tests use the recording [`MockBackend`](tests::MockBackend) so the
//! batch loop can be exercised without decoding a single pixel.

use super::params::OptimizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute an in-place optimize: decode, normalize color, downscale if
    /// wider than the cap, re-encode over the source path.
    fn optimize(&self, params: &OptimizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    ///
    /// Paths whose file name contains `fail_marker` error out, which is how
    /// the compressor's skip-and-continue behavior gets tested.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_marker: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Optimize {
            source: String,
            max_width: u32,
            quality: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(marker: &str) -> Self {
            Self {
                fail_marker: Some(marker.to_string()),
                ..Self::default()
            }
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn should_fail(&self, path: &Path) -> bool {
            match &self.fail_marker {
                Some(marker) => path.to_string_lossy().contains(marker.as_str()),
                None => false,
            }
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn optimize(&self, params: &OptimizeParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Optimize {
                source: params.source.to_string_lossy().to_string(),
                max_width: params.max_width,
                quality: params.quality.value(),
            });

            if self.should_fail(&params.source) {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock failure for {}",
                    params.source.display()
                )));
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_records_optimize() {
        use crate::imaging::Quality;

        let backend = MockBackend::new();
        backend
            .optimize(&OptimizeParams {
                source: "/photos/a.jpg".into(),
                max_width: 3000,
                quality: Quality::new(85),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Optimize {
                max_width: 3000,
                quality: 85,
                ..
            }
        ));
    }

    #[test]
    fn mock_fails_on_marked_paths() {
        use crate::imaging::Quality;

        let backend = MockBackend::failing_on("broken");
        let err = backend.optimize(&OptimizeParams {
            source: "/photos/broken.jpg".into(),
            max_width: 3000,
            quality: Quality::default(),
        });
        assert!(err.is_err());

        let ok = backend.optimize(&OptimizeParams {
            source: "/photos/fine.jpg".into(),
            max_width: 3000,
            quality: Quality::default(),
        });
        assert!(ok.is_ok());
    }
}
