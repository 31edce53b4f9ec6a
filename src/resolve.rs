//! Crop rectangle resolution.
//!
//! All functions here are pure: raw user numbers plus source dimensions in,
//! a rectangle (or a validation failure) out. No I/O, no prompting — the
//! session gathers input and this module decides what it means.
//!
//! The three modes deliberately do not share a validation policy:
//!
//! | Mode | Positions | Width | Height |
//! |------|-----------|-------|--------|
//! | Basic | bounds-checked, error | silently clamped to the image | never clamped |
//! | ParamRelative | unchecked | unchecked | unchecked |
//! | ParamAbsolute | unchecked | unchecked | unchecked |
//!
//! The parameter modes additionally have a *silent no-op*: a line that does
//! not split into exactly four tokens yields `Ok(None)` — no rectangle, no
//! error, the caller just re-prompts. That policy is a feature of the tool,
//! not an accident; see DESIGN.md.

use crate::imaging::Dimensions;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Start position X exceeds original width.")]
    StartXOutOfBounds,
    #[error("Start position Y exceeds original height.")]
    StartYOutOfBounds,
    #[error("Value must be 0 or more.")]
    Negative,
    #[error("Invalid input.")]
    InvalidInput,
}

/// Which corner a Basic-mode start Y coordinate is measured from.
///
/// With `BottomLeft`, the user gives the *bottom* edge of the region and the
/// crop extends upward by `height`; the resolver converts to top-left
/// coordinates before building the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAnchor {
    TopLeft,
    BottomLeft,
}

/// Raw per-image crop input, one variant per process mode.
///
/// Basic carries numbers the session already parsed one prompt at a time.
/// The parameter modes carry the raw line; tokenizing it is resolution work,
/// because the token count decides between "rectangle" and "silent no-op".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropRequest {
    Basic {
        anchor: CropAnchor,
        pos_x: i64,
        pos_y: i64,
        width: i64,
        height: i64,
    },
    ParamRelative { line: String },
    ParamAbsolute { line: String },
}

/// A resolved crop region in pixel coordinates.
///
/// `x0 <= x1` and `y0 <= y1` hold for anything Basic mode produces from
/// non-negative sizes; the parameter modes pass user values through without
/// reordering, so the backend is the one that rejects inverted rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

/// Resolve a crop request against the source image dimensions.
///
/// `Ok(None)` is the parameter modes' silent no-op (wrong token count).
/// Errors abort the current image; the session prints them and returns to
/// the nearest prompt loop.
pub fn resolve(request: &CropRequest, dims: Dimensions) -> Result<Option<CropRect>, ResolveError> {
    match request {
        CropRequest::Basic {
            anchor,
            pos_x,
            pos_y,
            width,
            height,
        } => resolve_basic(*anchor, *pos_x, *pos_y, *width, *height, dims).map(Some),
        CropRequest::ParamRelative { line } => {
            Ok(parse_params(line)?.map(|[x, y, w, h]| CropRect {
                x0: x,
                y0: y,
                x1: x + w,
                y1: y + h,
            }))
        }
        CropRequest::ParamAbsolute { line } => {
            Ok(parse_params(line)?.map(|[x0, y0, x1, y1]| CropRect { x0, y0, x1, y1 }))
        }
    }
}

fn resolve_basic(
    anchor: CropAnchor,
    pos_x: i64,
    pos_y: i64,
    mut width: i64,
    height: i64,
    dims: Dimensions,
) -> Result<CropRect, ResolveError> {
    let (img_w, img_h) = (i64::from(dims.width), i64::from(dims.height));

    if pos_x > img_w {
        return Err(ResolveError::StartXOutOfBounds);
    }
    if pos_x < 0 {
        return Err(ResolveError::Negative);
    }
    if pos_y > img_h {
        return Err(ResolveError::StartYOutOfBounds);
    }
    if pos_y < 0 {
        return Err(ResolveError::Negative);
    }

    // Width is clamped to the space right of the anchor; height is not
    // clamped anywhere, so y1 may run past the bottom edge.
    if pos_x + width > img_w {
        width = img_w - pos_x;
    }

    let y0 = match anchor {
        CropAnchor::TopLeft => pos_y,
        // The given Y is the bottom edge; the region extends upward and is
        // floored at the top of the image. No upper clamp.
        CropAnchor::BottomLeft => (pos_y - height).max(0),
    };

    Ok(CropRect {
        x0: pos_x,
        y0,
        x1: pos_x + width,
        y1: y0 + height,
    })
}

/// Split a parameter line into exactly four integers.
///
/// Wrong token count → `Ok(None)` (silent no-op). A token that is not an
/// integer → `InvalidInput`.
fn parse_params(line: &str) -> Result<Option<[i64; 4]>, ResolveError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 4 {
        return Ok(None);
    }
    let mut values = [0i64; 4];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| ResolveError::InvalidInput)?;
    }
    Ok(Some(values))
}
