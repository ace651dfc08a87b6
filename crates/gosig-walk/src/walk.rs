//! File discovery for one path argument.
//!
//! Uses the `ignore` crate's walker in one of two modes:
//!
//! - `Raw`: disables all standard filters. Every file under the root is a
//!   candidate, hidden and gitignored ones included. This is the default.
//! - `LocalProject`: respects `.gitignore` (even outside a git checkout) and
//!   other standard ignore files.
//!
//! Candidates are then filtered by the configured extension allow-list and
//! suffix deny-list and sorted by display path.

use std::path::{Path, PathBuf};

use gosig_config::DiscoveryConfig;
use ignore::WalkBuilder;

use crate::display::display_path;
use crate::error::WalkError;
use crate::target::PathTarget;

/// Walking mode for the file walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Respects .gitignore and friends.
    LocalProject,
    /// No filters.
    Raw,
}

impl WalkMode {
    #[must_use]
    pub const fn from_config(discovery: &DiscoveryConfig) -> Self {
        if discovery.respect_gitignore {
            Self::LocalProject
        } else {
            Self::Raw
        }
    }
}

/// A file to process and the path to print for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub display: String,
}

/// Everything one path argument resolved to.
///
/// Unreadable directory entries do not stop the walk; they land in `errors`.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<SourceFile>,
    pub errors: Vec<WalkError>,
}

/// Build a walker over `root`. Non-recursive walks stop at depth one.
#[must_use]
pub fn build_walker(root: &Path, mode: WalkMode, recursive: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    match mode {
        WalkMode::LocalProject => {
            builder.hidden(false);
            builder.require_git(false);
        }
        WalkMode::Raw => {
            builder.standard_filters(false);
            builder.hidden(false);
        }
    }

    if !recursive {
        builder.max_depth(Some(1));
    }

    builder.build()
}

/// Resolve one path argument into the sorted list of files to process.
///
/// # Errors
/// Returns [`WalkError::PathAccess`] when the root cannot be read and
/// [`WalkError::UnsupportedExtension`] for an explicitly named file outside
/// the allow-list. An explicitly named file with an excluded suffix yields an
/// empty [`Discovery`].
pub fn discover(
    target: &PathTarget,
    discovery: &DiscoveryConfig,
    cwd: &Path,
) -> Result<Discovery, WalkError> {
    let metadata = std::fs::metadata(&target.root).map_err(|source| WalkError::PathAccess {
        path: target.root.clone(),
        source,
    })?;

    if metadata.is_file() {
        return discover_file(&target.root, discovery, cwd);
    }

    let mut found = Discovery::default();
    let walker = build_walker(&target.root, WalkMode::from_config(discovery), target.recursive);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(root = %target.root.display(), %error, "skipping unreadable entry");
                found.errors.push(WalkError::Walk(error));
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !is_candidate(&name, discovery) {
            continue;
        }
        found.files.push(SourceFile {
            display: display_path(entry.path(), cwd),
            path: entry.into_path(),
        });
    }

    found.files.sort_by(|a, b| a.display.cmp(&b.display));
    tracing::debug!(
        root = %target.root.display(),
        recursive = target.recursive,
        files = found.files.len(),
        "discovered go files"
    );
    Ok(found)
}

fn discover_file(
    path: &Path,
    discovery: &DiscoveryConfig,
    cwd: &Path,
) -> Result<Discovery, WalkError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if discovery.is_excluded(&name) {
        tracing::debug!(path = %path.display(), "skipping excluded file");
        return Ok(Discovery::default());
    }
    if !discovery.has_allowed_extension(&name) {
        return Err(WalkError::UnsupportedExtension {
            path: path.to_path_buf(),
            allowed: discovery.extensions_display(),
        });
    }
    Ok(Discovery {
        files: vec![SourceFile {
            path: path.to_path_buf(),
            display: display_path(path, cwd),
        }],
        errors: Vec::new(),
    })
}

fn is_candidate(name: &str, discovery: &DiscoveryConfig) -> bool {
    discovery.has_allowed_extension(name) && !discovery.is_excluded(name)
}
