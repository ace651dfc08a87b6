use std::io::Write;

use gosig_parser::{RenderedSignature, SignatureKind, format_line};
use serde::Serialize;

use crate::cli::OutputFormat;

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
pub struct JsonRecord<'a> {
    pub path: &'a str,
    pub line: usize,
    pub kind: SignatureKind,
    pub name: &'a str,
    pub signature: &'a str,
}

/// Write every signature of one file in the requested format.
pub fn write_signatures(
    out: &mut impl Write,
    display: &str,
    signatures: &[RenderedSignature],
    format: OutputFormat,
) -> anyhow::Result<()> {
    for sig in signatures {
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_line(display, sig))?,
            OutputFormat::Json => {
                let record = JsonRecord {
                    path: display,
                    line: sig.position.line,
                    kind: sig.kind,
                    name: &sig.name,
                    signature: &sig.text,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
