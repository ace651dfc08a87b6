//! Positional path arguments and the recursive-descent marker.

use std::path::PathBuf;

/// Suffixes that request a recursive scan, Go-tool style.
const RECURSIVE_MARKERS: &[&str] = &["/...", "\\..."];

/// One positional argument, split into its root and recursion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTarget {
    pub root: PathBuf,
    pub recursive: bool,
}

impl PathTarget {
    /// `./pkg/...` → `./pkg`, recursive. A bare `...` means the working
    /// directory, recursively.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        if arg == "..." {
            return Self {
                root: PathBuf::from("."),
                recursive: true,
            };
        }
        for marker in RECURSIVE_MARKERS {
            if let Some(stripped) = arg.strip_suffix(marker) {
                let root = if stripped.is_empty() { "/" } else { stripped };
                return Self {
                    root: PathBuf::from(root),
                    recursive: true,
                };
            }
        }
        Self {
            root: PathBuf::from(arg),
            recursive: false,
        }
    }
}
