//! Collision-safe output naming.
//!
//! Cropped images all land in one flat output directory, and a source image
//! can be cropped many times in a session, so colliding names are the normal
//! case rather than the exception. The scheme is the one file managers use:
//! the literal name first, then `name (1).ext`, `name (2).ext`, … until a
//! free slot is found.
//!
//! Naming is read-only: nothing here writes a file, so calling
//! [`next_available_path`] twice without saving in between returns the same
//! path both times. Two *processes* racing the same directory can therefore
//! pick the same path; the tool is single-user and accepts that.

use crate::filter::split_stem_extension;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// First path in `output_dir` that does not exist for `desired`.
///
/// Creates `output_dir` (recursively) if it is absent, so the existence
/// probes and the caller's subsequent save have a directory to work with.
/// The ` (N)` suffix goes between stem and extension; names without a
/// recognized extension get the suffix appended whole (`notes.bmp (1)`).
pub fn next_available_path(output_dir: &Path, desired: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let (stem, extension) = split_stem_extension(desired);
    let mut index: u32 = 0;
    loop {
        let candidate = candidate_name(desired, stem, extension, index);
        let path = output_dir.join(candidate);
        if !path.exists() {
            return Ok(path);
        }
        index += 1;
    }
}

fn candidate_name(desired: &str, stem: &str, extension: &str, index: u32) -> String {
    if index == 0 {
        desired.to_string()
    } else {
        format!("{stem} ({index}){extension}")
    }
}
