//! Declaration classifier: top-level tree nodes → [`Declaration`]s.
//!
//! Only direct children of `source_file` are visited, so declarations inside
//! function bodies never show up.

use ast_grep_core::{Doc, Node};

use super::lower::{lower, lower_sig, named_children};
use crate::parser::source_pos;
use crate::types::{
    Declaration, FunctionDecl, TypeDecl, ValueGroup, ValueKeyword, ValueName, ValueSpec,
    Visibility,
};

/// Classify every top-level declaration under `root`, in source order.
pub(super) fn classify<D: Doc>(root: &Node<D>) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for node in root.children() {
        match node.kind().as_ref() {
            "function_declaration" | "method_declaration" => {
                if let Some(func) = process_function(&node) {
                    decls.push(Declaration::Function(func));
                }
            }
            "type_declaration" => {
                decls.extend(process_type_declaration(&node).into_iter().map(Declaration::Type));
            }
            "const_declaration" => {
                decls.push(Declaration::Value(process_value_declaration(
                    &node,
                    ValueKeyword::Const,
                )));
            }
            "var_declaration" => {
                decls.push(Declaration::Value(process_value_declaration(
                    &node,
                    ValueKeyword::Var,
                )));
            }
            _ => {}
        }
    }
    decls
}

// ── function_declaration / method_declaration ─────────────────────

fn process_function<D: Doc>(node: &Node<D>) -> Option<FunctionDecl> {
    let name = node.field("name")?.text().to_string();
    Some(FunctionDecl {
        visibility: Visibility::of(&name),
        position: source_pos(node),
        has_receiver: node.field("receiver").is_some(),
        sig: lower_sig(node),
        name,
    })
}

// ── type_declaration ──────────────────────────────────────────────

fn process_type_declaration<D: Doc>(node: &Node<D>) -> Vec<TypeDecl> {
    named_children(node)
        .iter()
        .filter_map(|spec| match spec.kind().as_ref() {
            "type_spec" => process_type_spec(spec, false),
            "type_alias" => process_type_spec(spec, true),
            _ => None,
        })
        .collect()
}

/// Type parameters (`[T any]`) are not kept.
fn process_type_spec<D: Doc>(spec: &Node<D>, alias: bool) -> Option<TypeDecl> {
    let name_node = spec.field("name")?;
    let ty = spec.field("type")?;
    let name = name_node.text().to_string();
    Some(TypeDecl {
        visibility: Visibility::of(&name),
        position: source_pos(&name_node),
        alias,
        ty: lower(&ty),
        name,
    })
}

// ── const_declaration / var_declaration ───────────────────────────

fn process_value_declaration<D: Doc>(node: &Node<D>, keyword: ValueKeyword) -> ValueGroup {
    let mut specs = Vec::new();
    for child in named_children(node) {
        match child.kind().as_ref() {
            "const_spec" | "var_spec" => specs.push(process_value_spec(&child)),
            // `var ( ... )` wraps its specs in a list node.
            "var_spec_list" => specs.extend(
                named_children(&child)
                    .iter()
                    .filter(|spec| spec.kind().as_ref() == "var_spec")
                    .map(process_value_spec),
            ),
            _ => {}
        }
    }
    ValueGroup {
        keyword,
        position: source_pos(node),
        specs,
    }
}

fn process_value_spec<D: Doc>(spec: &Node<D>) -> ValueSpec {
    let names = spec
        .children()
        .filter(|c| c.kind().as_ref() == "identifier")
        .map(|ident| {
            let name = ident.text().to_string();
            ValueName {
                visibility: Visibility::of(&name),
                position: source_pos(&ident),
                name,
            }
        })
        .collect();
    let values = spec
        .field("value")
        .map(|list| named_children(&list).iter().map(lower).collect())
        .unwrap_or_default();
    ValueSpec {
        names,
        ty: spec.field("type").map(|ty| lower(&ty)),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;
    use crate::types::Expr;
    use pretty_assertions::assert_eq;

    fn classify_src(src: &str) -> Vec<Declaration> {
        let tree = parse_source(src);
        classify(&tree.root())
    }

    #[test]
    fn nested_declarations_are_skipped() {
        let decls = classify_src(
            "package p\n\nfunc Outer() {\n\tconst inner = 1\n\ttype local struct{}\n}\n",
        );
        assert_eq!(decls.len(), 1);
        assert!(matches!(&decls[0], Declaration::Function(f) if f.name == "Outer"));
    }

    #[test]
    fn declarations_come_back_in_source_order() {
        let decls = classify_src("package p\n\nvar X = 1\n\ntype T int\n\nfunc F() {}\n");
        let lines: Vec<usize> = decls.iter().map(|d| d.position().line).collect();
        assert_eq!(lines, vec![3, 5, 7]);
    }

    #[test]
    fn method_receiver_is_detected() {
        let decls = classify_src("package p\n\nfunc (s *Server) Start() error { return nil }\n");
        let Declaration::Function(func) = &decls[0] else {
            panic!("expected function");
        };
        assert_eq!(func.name, "Start");
        assert!(func.has_receiver);
    }

    #[test]
    fn grouped_types_split_per_spec() {
        let decls = classify_src("package p\n\ntype (\n\tA int\n\tB = string\n)\n");
        let types: Vec<(&str, bool)> = decls
            .iter()
            .filter_map(|d| match d {
                Declaration::Type(t) => Some((t.name.as_str(), t.alias)),
                _ => None,
            })
            .collect();
        assert_eq!(types, vec![("A", false), ("B", true)]);
    }

    #[test]
    fn var_block_specs_are_collected() {
        let decls =
            classify_src("package p\n\nvar (\n\ta, b = 1, 2\n\tc string\n)\n");
        let Declaration::Value(group) = &decls[0] else {
            panic!("expected value group");
        };
        assert_eq!(group.keyword, ValueKeyword::Var);
        assert_eq!(group.specs.len(), 2);
        assert_eq!(group.specs[0].names.len(), 2);
        assert_eq!(group.specs[0].values.len(), 2);
        assert_eq!(group.specs[1].ty, Some(Expr::ident("string")));
        assert!(group.specs[1].values.is_empty());
    }

    #[test]
    fn const_names_carry_their_own_positions() {
        let decls = classify_src("package p\n\nconst (\n\tA = iota\n\tB\n)\n");
        let Declaration::Value(group) = &decls[0] else {
            panic!("expected value group");
        };
        let lines: Vec<usize> = group
            .specs
            .iter()
            .flat_map(|s| s.names.iter().map(|n| n.position.line))
            .collect();
        assert_eq!(lines, vec![4, 5]);
    }
}
