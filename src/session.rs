//! The interactive cropping session.
//!
//! Everything here is glue: menus, prompt loops, and the dispatch between
//! the crop resolver, the output namer, and the image backend. The session
//! owns no policy of its own beyond "recovery is always a return to the
//! nearest enclosing prompt loop" — a failed crop never kills the process,
//! it just puts the user back at the previous menu.
//!
//! ## Loop structure
//!
//! ```text
//! run
//! ├── mode menu (once; anything but 1/2/3 exits)
//! └── target loop (empty line exits)
//!     ├── directory → file-choice sub-loop (empty/out-of-range exits)
//!     │   └── per-file loop
//!     └── file → per-file loop
//! ```
//!
//! The per-file loop repeats until cancelled, so one image can be cropped
//! several times in a row — each save picks a fresh non-colliding name.

use crate::console::Console;
use crate::filter;
use crate::imaging::{CropParams, ImageBackend};
use crate::naming;
use crate::resolve::{self, CropAnchor, CropRequest};
use std::fs;
use std::io;
use std::path::Path;

/// Crop-parameter entry style, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessMode {
    Basic,
    ParamRelative,
    ParamAbsolute,
}

const INVALID_INPUT: &str = "[ERROR] Invalid input.";

/// Run one interactive session.
///
/// `output_dir` is where every cropped image lands, flat — it is threaded
/// through explicitly rather than read from a global.
pub fn run(
    console: &mut impl Console,
    backend: &impl ImageBackend,
    output_dir: &Path,
) -> io::Result<()> {
    let Some(mode) = select_process_mode(console)? else {
        return Ok(());
    };

    loop {
        let target = console.prompt("Enter directory or filepath of image: ")?;
        let target = target.replace('\\', "/");
        if target.is_empty() {
            return Ok(());
        }

        let path = Path::new(&target);
        if path.is_dir() {
            let files = list_images(path)?;
            if files.is_empty() {
                console.emit("[ERROR] Directory has no images.");
                continue;
            }
            process_file_choice(console, backend, output_dir, path, &files, mode)?;
        } else if path.is_file() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if filter::is_valid_image(&name) {
                let dir = path.parent().unwrap_or_else(|| Path::new("."));
                process_file(console, backend, output_dir, dir, &name, mode)?;
            } else {
                console.emit(&format!(
                    "[ERROR] Expecting the file to have one of the extensions: {}",
                    filter::describe_extensions()
                ));
            }
        } else {
            console.emit("[ERROR] Directory or image does not exist.");
        }
    }
}

/// Show the mode menu. Anything other than a trimmed `1`/`2`/`3` is `None`,
/// which exits the session silently.
fn select_process_mode(console: &mut impl Console) -> io::Result<Option<ProcessMode>> {
    console.emit("[INFO] Select process mode");
    console.emit("1: Basic");
    console.emit("2: Parameter Relative");
    console.emit("3: Parameter Absolute");
    let choice = console.prompt("Enter choice: ")?;
    Ok(match choice.trim() {
        "1" => Some(ProcessMode::Basic),
        "2" => Some(ProcessMode::ParamRelative),
        "3" => Some(ProcessMode::ParamAbsolute),
        _ => None,
    })
}

/// Plain files in `dir` with a recognized extension, sorted so the numbered
/// menu is stable across runs. Non-recursive.
fn list_images(dir: &Path) -> io::Result<Vec<String>> {
    let mut files: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| filter::is_valid_image(name))
        .collect();
    files.sort();
    Ok(files)
}

/// Numbered file menu for a directory target.
///
/// Empty input and out-of-range numbers exit the sub-loop; a non-numeric
/// choice is an error and the menu is shown again.
fn process_file_choice(
    console: &mut impl Console,
    backend: &impl ImageBackend,
    output_dir: &Path,
    dir: &Path,
    files: &[String],
    mode: ProcessMode,
) -> io::Result<()> {
    loop {
        console.emit("[INFO] Select file:");
        for (i, name) in files.iter().enumerate() {
            console.emit(&format!("{} - {}", i + 1, name));
        }
        let choice = console.prompt("Enter choice: ")?;
        if choice.is_empty() {
            return Ok(());
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => {
                process_file(console, backend, output_dir, dir, &files[n - 1], mode)?;
            }
            Ok(_) => return Ok(()),
            Err(_) => console.emit("[ERROR] Invalid choice."),
        }
    }
}

/// Crop one file repeatedly until the user cancels or something fails.
///
/// Codec failures and invalid numeric input abort the current image (back to
/// the enclosing menu); they are all reported with the same generic line.
fn process_file(
    console: &mut impl Console,
    backend: &impl ImageBackend,
    output_dir: &Path,
    dir: &Path,
    name: &str,
    mode: ProcessMode,
) -> io::Result<()> {
    let source = dir.join(name);

    loop {
        let dims = match backend.identify(&source) {
            Ok(dims) => dims,
            Err(_) => {
                console.emit(INVALID_INPUT);
                return Ok(());
            }
        };

        let request = match mode {
            ProcessMode::Basic => {
                console.emit(&format!("[INFO] Image size: {}x{}", dims.width, dims.height));
                let Some(anchor) = select_crop_anchor(console)? else {
                    return Ok(());
                };
                let Some(pos_x) = read_number(console, "Enter start position X: ")? else {
                    console.emit(INVALID_INPUT);
                    return Ok(());
                };
                let Some(pos_y) = read_number(console, "Enter start position Y: ")? else {
                    console.emit(INVALID_INPUT);
                    return Ok(());
                };
                let Some(width) = read_number(console, "Enter width: ")? else {
                    console.emit(INVALID_INPUT);
                    return Ok(());
                };
                let Some(height) = read_number(console, "Enter height: ")? else {
                    console.emit(INVALID_INPUT);
                    return Ok(());
                };
                CropRequest::Basic {
                    anchor,
                    pos_x,
                    pos_y,
                    width,
                    height,
                }
            }
            ProcessMode::ParamRelative => {
                let line = console
                    .prompt("Enter param ({start_pos_x} {start_pos_y} {width} {height}): ")?;
                if line.is_empty() {
                    return Ok(());
                }
                CropRequest::ParamRelative { line }
            }
            ProcessMode::ParamAbsolute => {
                let line = console
                    .prompt("Enter param ({start_pos_x} {start_pos_y} {end_pos_x} {end_pos_y}): ")?;
                if line.is_empty() {
                    return Ok(());
                }
                CropRequest::ParamAbsolute { line }
            }
        };

        let rect = match resolve::resolve(&request, dims) {
            Ok(Some(rect)) => rect,
            // Silent no-op: nothing written, nothing said, prompt again.
            Ok(None) => continue,
            Err(err) => {
                console.emit(&format!("[ERROR] {err}"));
                return Ok(());
            }
        };

        let output = match naming::next_available_path(output_dir, name) {
            Ok(path) => path,
            Err(_) => {
                console.emit(INVALID_INPUT);
                return Ok(());
            }
        };

        match backend.crop(&CropParams {
            source: source.clone(),
            output: output.clone(),
            rect,
        }) {
            Ok(()) => console.emit(&format!("[SUCCESS] Image saved as {}", output.display())),
            Err(_) => {
                console.emit(INVALID_INPUT);
                return Ok(());
            }
        }
    }
}

/// Anchor menu for Basic mode. Anything but `1`/`2` cancels the per-file loop.
fn select_crop_anchor(console: &mut impl Console) -> io::Result<Option<CropAnchor>> {
    console.emit("[INFO] Crop Start Position");
    console.emit("1: Top Left");
    console.emit("2: Bottom Left");
    let choice = console.prompt("Enter choice: ")?;
    Ok(match choice.trim() {
        "1" => Some(CropAnchor::TopLeft),
        "2" => Some(CropAnchor::BottomLeft),
        _ => None,
    })
}

/// Prompt for one integer. `None` means the line did not parse; the caller
/// reports it and aborts the current image.
fn read_number(console: &mut impl Console, message: &str) -> io::Result<Option<i64>> {
    let line = console.prompt(message)?;
    Ok(line.trim().parse().ok())
}
