use gosig_config::FormatConfig;
use pretty_assertions::assert_eq;

use super::*;
use crate::parser::parse_go;
pub(super) use crate::types::SignatureKind;

mod functions;
mod interfaces;

const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.go");

fn extract_with(source: &str, config: &FormatConfig) -> Vec<RenderedSignature> {
    let tree = parse_go(source).expect("source should parse");
    extract(&tree, config)
}

fn parse_and_extract(source: &str) -> Vec<RenderedSignature> {
    extract_with(source, &FormatConfig::default())
}

fn all_config() -> FormatConfig {
    FormatConfig {
        include_private: true,
        ..FormatConfig::default()
    }
}

fn find_by_name<'a>(sigs: &'a [RenderedSignature], name: &str) -> &'a RenderedSignature {
    sigs.iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("should find signature named '{name}'"))
}

fn texts(sigs: &[RenderedSignature]) -> Vec<&str> {
    sigs.iter().map(|s| s.text.as_str()).collect()
}

/// Wrap declarations in a package clause.
fn go(body: &str) -> String {
    format!("package p\n\n{body}\n")
}

// ── Smoke ──────────────────────────────────────────────────────

#[test]
fn sample_fixture_extracts() {
    let sigs = parse_and_extract(SAMPLE);
    assert!(sigs.len() > 20, "got {} signatures", sigs.len());
}

#[test]
fn extraction_is_idempotent() {
    let first = parse_and_extract(SAMPLE);
    let second = parse_and_extract(SAMPLE);
    assert_eq!(first, second);
}
