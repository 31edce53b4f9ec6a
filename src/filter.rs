//! Image extension filtering and filename splitting.
//!
//! Every place that decides "is this file an image we handle" goes through
//! this module: the directory listing, the direct-file target check, and the
//! output namer's stem/extension split. The allow-list is ordered and
//! case-sensitive; matching is a plain suffix test, so dotfiles and names
//! with multiple dots behave predictably (`archive.tar.png` is a `.png`).

/// Recognized image extensions, in match order.
pub const VALID_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// True iff `name` ends with one of the recognized extensions.
pub fn is_valid_image(name: &str) -> bool {
    VALID_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Split `name` into `(stem, extension)` on the first matching suffix.
///
/// The extension keeps its leading dot. If no recognized extension matches,
/// the whole name is returned as the stem and the extension is empty —
/// callers treat an empty extension as "unsupported", never as a crash.
pub fn split_stem_extension(name: &str) -> (&str, &str) {
    for ext in VALID_EXTENSIONS {
        if let Some(stem) = name.strip_suffix(ext) {
            return (stem, ext);
        }
    }
    (name, "")
}

/// The allow-list rendered for error messages: `".jpg, .jpeg, .png, .gif"`.
pub fn describe_extensions() -> String {
    VALID_EXTENSIONS.join(", ")
}
