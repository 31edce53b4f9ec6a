//! # quickcrop
//!
//! An interactive terminal tool for batch-cropping images. Point it at a
//! directory or a single file, pick a process mode, and type crop coordinates;
//! results are written to a flat output folder without ever overwriting an
//! existing file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`filter`] | Image extension allow-list and stem/extension splitting |
//! | [`resolve`] | Crop rectangle resolution — the three mode algorithms and their validation policies |
//! | [`naming`] | Collision-safe output naming (`name (N).ext` suffix scheme) |
//! | [`console`] | Injected prompt/emit capability over the terminal |
//! | [`session`] | The interactive loop: menus, target selection, per-file processing |
//! | [`imaging`] | Codec seam: [`imaging::ImageBackend`] trait + `image`-crate backend |
//!
//! # Design Decisions
//!
//! ## Three Modes, One Sum Type
//!
//! The crop modes differ in *policy*, not just arithmetic: Basic validates
//! start positions and silently clamps width, while the two parameter modes
//! pass everything through unchecked and treat a malformed line as a silent
//! no-op. Modeling the request as an enum ([`resolve::CropRequest`]) keeps
//! each policy in one match arm instead of scattering mode checks through the
//! session loop.
//!
//! ## Pure Core, Injected Edges
//!
//! [`resolve`] and [`naming`] decisions are pure with respect to the terminal;
//! all prompting goes through the [`console::Console`] trait and all pixel
//! work through [`imaging::ImageBackend`]. The session tests drive complete
//! interactive flows with a scripted console and a recording mock backend —
//! no terminal, no image decoding.
//!
//! ## Nothing Is Fatal
//!
//! Every failure — bad coordinates, undecodable file, unsupported extension —
//! is printed as a human-readable line and drops the user back at the nearest
//! prompt loop. The process only exits when the user cancels (an empty line
//! at a top-level prompt, or a menu choice outside the offered options).

pub mod console;
pub mod filter;
pub mod imaging;
pub mod naming;
pub mod resolve;
pub mod session;
