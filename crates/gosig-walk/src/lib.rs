//! # gosig-walk
//!
//! Turns positional path arguments into the ordered list of Go files to
//! process, and computes the path printed in front of each signature.
//!
//! - `pkg/...` (or `pkg\...`) walks `pkg` recursively
//! - a directory without the marker lists only its own files
//! - a file is taken as-is if its extension is allowed; an excluded suffix
//!   (`_test.go` by default) skips it without an error

pub mod display;
pub mod error;
pub mod target;
pub mod walk;

pub use display::display_path;
pub use error::WalkError;
pub use target::PathTarget;
pub use walk::{Discovery, SourceFile, WalkMode, build_walker, discover};
