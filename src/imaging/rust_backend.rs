//! Pure Rust image processing backend — zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode (JPEG, PNG, GIF)** | `image` crate (pure Rust decoders) |
//! | **Crop** | `image::DynamicImage::crop_imm` |
//! | **Encode** | `DynamicImage::save` (format inferred from extension) |
//!
//! The resolver may hand over rectangles that run past the image edges (the
//! parameter modes never bounds-check, and Basic mode never clamps height).
//! This backend intersects the rectangle with the image and extracts that
//! region; rectangles that are inverted or lie entirely outside the image are
//! rejected with [`BackendError::ProcessingFailed`].

use super::backend::{BackendError, CropParams, Dimensions, ImageBackend};
use crate::resolve::CropRect;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Intersect a requested rectangle with the image bounds.
///
/// Returns `(x, y, width, height)` for `crop_imm`. Errors on inverted
/// rectangles and on intersections with no pixels.
fn crop_region(rect: &CropRect, img_w: u32, img_h: u32) -> Result<(u32, u32, u32, u32), BackendError> {
    if rect.x1 < rect.x0 || rect.y1 < rect.y0 {
        return Err(BackendError::ProcessingFailed(format!(
            "Inverted crop region ({}, {}, {}, {})",
            rect.x0, rect.y0, rect.x1, rect.y1
        )));
    }

    let x0 = rect.x0.clamp(0, i64::from(img_w)) as u32;
    let y0 = rect.y0.clamp(0, i64::from(img_h)) as u32;
    let x1 = rect.x1.clamp(0, i64::from(img_w)) as u32;
    let y1 = rect.y1.clamp(0, i64::from(img_h)) as u32;

    let width = x1 - x0;
    let height = y1 - y0;
    if width == 0 || height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "Empty crop region ({}, {}, {}, {}) for {}x{} image",
            rect.x0, rect.y0, rect.x1, rect.y1, img_w, img_h
        )));
    }

    Ok((x0, y0, width, height))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let (x, y, width, height) = crop_region(&params.rect, img.width(), img.height())?;
        let cropped = img.crop_imm(x, y, width, height);
        cropped.save(&params.output).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to save {}: {}",
                params.output.display(),
                e
            ))
        })
    }
}
