//! File processor: read → parse → extract for one Go file.

use std::path::Path;

use gosig_config::FormatConfig;

use crate::error::{FileError, ParserError};
use crate::extractor::extract;
use crate::parser::parse_go;
use crate::types::RenderedSignature;

/// Extract signatures from Go source text.
///
/// # Errors
/// Returns [`ParserError::Syntax`] if the source does not parse cleanly.
pub fn process_source(
    source: &str,
    config: &FormatConfig,
) -> Result<Vec<RenderedSignature>, ParserError> {
    let tree = parse_go(source)?;
    Ok(extract(&tree, config))
}

/// Read and process one file from disk.
///
/// # Errors
/// Returns [`FileError`] carrying the path when reading or parsing fails.
pub fn process_file(
    path: &Path,
    config: &FormatConfig,
) -> Result<Vec<RenderedSignature>, FileError> {
    let source = std::fs::read_to_string(path).map_err(|e| FileError::new(path, e))?;
    let signatures = process_source(&source, config).map_err(|e| FileError::new(path, e))?;
    tracing::debug!(
        path = %path.display(),
        signatures = signatures.len(),
        "processed go file"
    );
    Ok(signatures)
}

/// `<display-path>: <signature>`
#[must_use]
pub fn format_line(display_path: &str, signature: &RenderedSignature) -> String {
    format!("{display_path}: {signature}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn process_file_reads_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".go")
            .tempfile()
            .expect("temp file");
        writeln!(file, "package demo\n\nfunc Hello(name string) string {{ return name }}")
            .expect("write");

        let sigs = process_file(file.path(), &FormatConfig::default()).expect("process");
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].text, "func Hello(name string) string");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.go");
        let err = process_file(&path, &FormatConfig::default()).expect_err("should fail");
        assert!(matches!(err.source, ParserError::Io(_)));
        assert!(err.to_string().contains("absent.go"), "{err}");
    }

    #[test]
    fn syntax_error_reports_path() {
        let mut file = tempfile::Builder::new()
            .suffix(".go")
            .tempfile()
            .expect("temp file");
        writeln!(file, "package demo\n\nfunc Broken( {{").expect("write");

        let err = process_file(file.path(), &FormatConfig::default()).expect_err("should fail");
        assert!(matches!(err.source, ParserError::Syntax { .. }), "{err}");
    }

    #[test]
    fn line_is_prefixed_with_display_path() {
        let sigs = process_source("package p\n\ntype ID int\n", &FormatConfig::default())
            .expect("process");
        assert_eq!(format_line("pkg/a.go", &sigs[0]), "pkg/a.go: type ID int");
    }
}
