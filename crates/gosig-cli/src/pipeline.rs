//! Path arguments → discovered files → signatures on stdout.
//!
//! Collect-and-continue: a failing path or file is reported on `err` and
//! counted, and the remaining work still runs.

use std::io::Write;
use std::path::Path;

use gosig_config::GosigConfig;
use gosig_parser::process_file;
use gosig_walk::{PathTarget, discover};

use crate::cli::OutputFormat;
use crate::output::write_signatures;

/// Totals for one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub signatures: usize,
    pub failures: usize,
}

impl Summary {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

/// Process every path argument in the order given.
///
/// Only write failures on `out`/`err` are returned as errors; per-path and
/// per-file problems are reported and counted in the [`Summary`].
pub fn run_paths(
    paths: &[String],
    config: &GosigConfig,
    cwd: &Path,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for arg in paths {
        let target = PathTarget::parse(arg);
        let found = match discover(&target, &config.discovery, cwd) {
            Ok(found) => found,
            Err(error) => {
                report(err, &mut summary, &error)?;
                continue;
            }
        };
        for error in &found.errors {
            report(err, &mut summary, error)?;
        }

        for file in &found.files {
            match process_file(&file.path, &config.format) {
                Ok(signatures) => {
                    summary.files += 1;
                    summary.signatures += signatures.len();
                    write_signatures(out, &file.display, &signatures, format)?;
                }
                Err(error) => report(err, &mut summary, &error)?,
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn report(
    err: &mut impl Write,
    summary: &mut Summary,
    error: &dyn std::error::Error,
) -> anyhow::Result<()> {
    summary.failures += 1;
    tracing::debug!(%error, "path failed");
    writeln!(err, "gosig error: {error}")?;
    Ok(())
}
