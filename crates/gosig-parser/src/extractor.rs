//! Go declaration extraction: classify → format → order.
//!
//! The tree is lowered into owned [`Expr`](crate::types::Expr) values once per
//! declaration; rendering and inference only ever see the lowered form.

use std::collections::BTreeMap;

use ast_grep_language::SupportLang;
use gosig_config::FormatConfig;

use crate::types::{Declaration, RenderedSignature, SourcePos};

mod classify;
mod format;
mod infer;
mod lower;
mod render;

pub use infer::infer;
pub use render::{render, render_sig};

/// Classify the top-level declarations of a parsed Go file.
pub fn declarations<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> Vec<Declaration> {
    classify::classify(&root.root())
}

/// Extract every admitted signature from a parsed Go file, in source order.
///
/// Signatures sharing a position keep the last one produced.
pub fn extract<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    config: &FormatConfig,
) -> Vec<RenderedSignature> {
    let mut ordered: BTreeMap<SourcePos, RenderedSignature> = BTreeMap::new();
    for decl in declarations(root) {
        for sig in format::format_declaration(&decl, config) {
            ordered.insert(sig.position, sig);
        }
    }
    ordered.into_values().collect()
}

#[cfg(test)]
mod tests;
