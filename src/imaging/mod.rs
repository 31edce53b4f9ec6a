//! Image codec seam.
//!
//! The module is split into:
//! - **Backend**: [`ImageBackend`] trait, [`Dimensions`], [`CropParams`],
//!   and the recording mock used by session tests
//! - **RustBackend**: the production implementation on the `image` crate

pub mod backend;
pub mod rust_backend;

pub use backend::{BackendError, CropParams, Dimensions, ImageBackend};
pub use rust_backend::RustBackend;
