use clap::Parser;
use quickcrop::console::StdConsole;
use quickcrop::imaging::RustBackend;
use quickcrop::session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quickcrop")]
#[command(version)]
#[command(about = "Interactive batch image cropping")]
#[command(long_about = "\
Interactive batch image cropping

Pick a process mode, then point the tool at a directory or a single image
file. Cropped results are written to the output directory, never overwriting
existing files — colliding names get a ' (N)' suffix.

Process modes:

  1: Basic               Prompts for an anchor corner (top-left or
                         bottom-left), start position, width, and height.
                         Start positions are validated against the image;
                         width is clamped to the right edge.
  2: Parameter Relative  One line: {start_pos_x} {start_pos_y} {width} {height}
  3: Parameter Absolute  One line: {start_pos_x} {start_pos_y} {end_pos_x} {end_pos_y}

Supported extensions: .jpg, .jpeg, .png, .gif (case-sensitive).
An empty line at any prompt backs out of the current loop.")]
struct Cli {
    /// Output directory for cropped images (created on first save)
    #[arg(long, default_value = "out")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut console = StdConsole::new();
    let backend = RustBackend::new();
    session::run(&mut console, &backend, &cli.output)?;
    Ok(())
}
