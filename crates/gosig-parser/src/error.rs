//! Parser error types for gosig-parser.

use std::path::{Path, PathBuf};

/// Errors that can occur while parsing one Go source file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("syntax error at {line}:{column} near `{near}`")]
    Syntax {
        line: usize,
        column: usize,
        near: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`ParserError`] tied to the file it came from.
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: ParserError,
}

impl FileError {
    pub fn new(path: &Path, source: impl Into<ParserError>) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
