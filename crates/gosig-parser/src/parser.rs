//! ast-grep wrapper for Go sources and syntax error detection.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::types::SourcePos;

/// The concrete AST tree type returned by [`parse_source`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Longest source excerpt quoted in a syntax error.
const MAX_NEAR_CHARS: usize = 40;

/// Parse Go source into an ast-grep tree. Never fails; see [`parse_go`].
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// Parse Go source and reject trees that contain error or missing nodes.
///
/// # Errors
/// Returns [`ParserError::Syntax`] pointing at the first broken node.
pub fn parse_go(source: &str) -> Result<AstTree, ParserError> {
    let tree = parse_source(source);
    check_syntax(&tree.root())?;
    Ok(tree)
}

/// Walk the tree in source order and report the first `ERROR`/missing node.
///
/// # Errors
/// Returns [`ParserError::Syntax`] when the tree-sitter recovery kicked in.
pub fn check_syntax<D: ast_grep_core::Doc>(root: &Node<D>) -> Result<(), ParserError> {
    let Some(bad) = root.dfs().find(|n| n.is_error() || n.is_missing()) else {
        return Ok(());
    };
    let pos = source_pos(&bad);
    let near = if bad.is_missing() {
        format!("missing {}", bad.kind())
    } else {
        excerpt(&bad.text())
    };
    Err(ParserError::Syntax {
        line: pos.line,
        column: pos.column,
        near,
    })
}

/// 1-based line/column plus byte offset of a node's start.
pub fn source_pos<D: ast_grep_core::Doc>(node: &Node<D>) -> SourcePos {
    let start = node.start_pos();
    SourcePos {
        offset: node.range().start,
        line: start.line() + 1,
        column: start.column(node) + 1,
    }
}

fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    if first_line.chars().count() > MAX_NEAR_CHARS {
        let cut: String = first_line.chars().take(MAX_NEAR_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_produces_go_tree() {
        let tree = parse_source("package demo\n\nfunc Run() {}\n");
        assert_eq!(tree.root().kind().as_ref(), "source_file");
    }

    #[test]
    fn valid_source_passes_syntax_check() {
        assert!(parse_go("package demo\n\nvar X = 1\n").is_ok());
    }

    #[test]
    fn comments_only_file_is_valid() {
        assert!(parse_go("// Package demo does nothing.\npackage demo\n").is_ok());
    }

    #[test]
    fn garbage_is_a_syntax_error() {
        let err = parse_go("package test\n\tthis is not valid go code\n")
            .err().expect("should reject invalid source");
        assert!(matches!(err, ParserError::Syntax { line, .. } if line >= 1), "{err:?}");
    }

    #[test]
    fn unterminated_block_is_a_syntax_error() {
        assert!(parse_go("package test\n\nfunc Broken() {\n").is_err());
    }

    #[test]
    fn source_pos_is_one_based() {
        let tree = parse_source("package demo\n\nfunc Run() {}\n");
        let func = tree
            .root()
            .children()
            .find(|c| c.kind().as_ref() == "function_declaration")
            .expect("function node");
        let pos = source_pos(&func);
        assert_eq!((pos.line, pos.column), (3, 1));
        assert_eq!(pos.offset, "package demo\n\n".len());
    }

    #[test]
    fn excerpt_is_single_line_and_bounded() {
        assert_eq!(excerpt("abc\ndef"), "abc");
        let long = "x".repeat(100);
        assert_eq!(excerpt(&long).chars().count(), MAX_NEAR_CHARS + 3);
    }
}
