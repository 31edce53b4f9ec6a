//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the session needs:
//! identify (dimensions without a full decode) and crop (decode, extract,
//! save). The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the recording
//! [`MockBackend`](tests::MockBackend) so session logic can be exercised
//! without real image files.

use crate::resolve::CropRect;
use std::path::{Path, PathBuf};
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

/// Full specification for one crop: where to read, where to write, and the
/// resolved rectangle. The rectangle arrives exactly as the resolver produced
/// it — possibly inverted or out of range in the parameter modes — and the
/// backend decides whether to clamp or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rect: CropRect,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Extract `params.rect` from the source image and save it to the output path.
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Mock backend that records operations without touching any pixels.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: RefCell<Vec<Dimensions>>,
        pub operations: RefCell<Vec<RecordedOp>>,
        /// When set, every crop call fails with `ProcessingFailed`.
        pub fail_crop: Cell<bool>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Crop {
            source: String,
            output: String,
            rect: CropRect,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue dimensions for successive identify calls.
        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: RefCell::new(dims),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }

        /// Only the crop operations, in call order.
        pub fn crops(&self) -> Vec<RecordedOp> {
            self.operations
                .borrow()
                .iter()
                .filter(|op| matches!(op, RecordedOp::Crop { .. }))
                .cloned()
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .borrow_mut()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Crop {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                rect: params.rect,
            });
            if self.fail_crop.get() {
                return Err(BackendError::ProcessingFailed(
                    "mock crop failure".to_string(),
                ));
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
    fn mock_identify_errors_when_exhausted() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/test/image.jpg")).is_err());
    }

    #[test]
    fn mock_records_crop() {
        let backend = MockBackend::new();
        let rect = CropRect {
            x0: 10,
            y0: 20,
            x1: 40,
            y1: 60,
        };

        backend
            .crop(&CropParams {
                source: "/source.jpg".into(),
                output: "/out/source.jpg".into(),
                rect,
            })
            .unwrap();

        let crops = backend.crops();
        assert_eq!(crops.len(), 1);
        assert!(matches!(&crops[0], RecordedOp::Crop { rect: r, .. } if *r == rect));
    }

    #[test]
    fn mock_crop_failure_flag() {
        let backend = MockBackend::new();
        backend.fail_crop.set(true);
        let result = backend.crop(&CropParams {
            source: "/source.jpg".into(),
            output: "/out/source.jpg".into(),
            rect: CropRect {
                x0: 0,
                y0: 0,
                x1: 1,
                y1: 1,
            },
        });
        assert!(result.is_err());
    }
}
