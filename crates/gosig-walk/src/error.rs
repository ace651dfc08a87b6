//! Discovery error types for gosig-walk.

use std::path::PathBuf;

/// Errors raised while resolving a path argument into source files.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The path does not exist or cannot be read.
    #[error("cannot access {}: {source}", path.display())]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly named file whose extension is not in the allow-list.
    #[error("{}: unsupported file extension (expected {allowed})", path.display())]
    UnsupportedExtension { path: PathBuf, allowed: String },

    /// A directory entry the walker could not read.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),
}
