//! Tree-sitter Go nodes → owned [`Expr`] syntax.

use ast_grep_core::{Doc, Node};

use crate::types::{ChanDir, Element, Expr, Field, FuncSig, InterfaceElem, LitKind};

/// Named children, minus comments.
pub(super) fn named_children<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .collect()
}

/// Source text on one line with runs of whitespace collapsed.
pub(super) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn verbatim<D: Doc>(node: &Node<D>) -> Expr {
    Expr::Verbatim(collapse_whitespace(&node.text()))
}

fn boxed<D: Doc>(node: Option<Node<D>>, parent: &Node<D>) -> Box<Expr> {
    Box::new(node.map_or_else(|| verbatim(parent), |n| lower(&n)))
}

fn first_named<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    named_children(node).into_iter().next()
}

/// Lower any type or value node.
pub(super) fn lower<D: Doc>(node: &Node<D>) -> Expr {
    let kind = node.kind();
    match kind.as_ref() {
        "identifier" | "type_identifier" | "field_identifier" | "package_identifier" | "true"
        | "false" | "nil" | "iota" => Expr::Ident(node.text().to_string()),
        "int_literal" => literal(node, LitKind::Int),
        "float_literal" => literal(node, LitKind::Float),
        "imaginary_literal" => literal(node, LitKind::Imaginary),
        "rune_literal" => literal(node, LitKind::Rune),
        "interpreted_string_literal" | "raw_string_literal" => literal(node, LitKind::String),
        "qualified_type" => match (node.field("package"), node.field("name")) {
            (Some(package), Some(name)) => Expr::Qualified {
                package: package.text().to_string(),
                name: name.text().to_string(),
            },
            _ => verbatim(node),
        },
        "pointer_type" => Expr::Pointer(boxed(first_named(node), node)),
        "slice_type" => Expr::Slice(boxed(node.field("element"), node)),
        "array_type" => Expr::Array {
            len: Some(boxed(node.field("length"), node)),
            elem: boxed(node.field("element"), node),
        },
        "implicit_length_array_type" => Expr::Array {
            len: None,
            elem: boxed(node.field("element"), node),
        },
        "map_type" => Expr::Map {
            key: boxed(node.field("key"), node),
            value: boxed(node.field("value"), node),
        },
        "channel_type" => lower_channel(node),
        "function_type" => Expr::Func(lower_sig(node)),
        "struct_type" => Expr::Struct(lower_struct_fields(node)),
        "interface_type" => Expr::Interface(lower_interface(node)),
        "generic_type" => Expr::Generic {
            base: boxed(node.field("type"), node),
            args: node
                .field("type_arguments")
                .map(|args| named_children(&args).iter().map(lower).collect())
                .unwrap_or_default(),
        },
        "type_elem" | "constraint_elem" | "interface_type_name" | "literal_element" => {
            let mut parts: Vec<Expr> = named_children(node).iter().map(lower).collect();
            match parts.len() {
                0 => verbatim(node),
                1 => parts.remove(0),
                _ => Expr::Union(parts),
            }
        }
        "negated_type" => Expr::Approx(boxed(first_named(node), node)),
        "parenthesized_type" | "parenthesized_expression" => {
            Expr::Paren(boxed(first_named(node), node))
        }
        "selector_expression" => match node.field("field") {
            Some(field) => Expr::Selector {
                operand: boxed(node.field("operand"), node),
                field: field.text().to_string(),
            },
            None => verbatim(node),
        },
        "call_expression" => Expr::Call {
            func: boxed(node.field("function"), node),
            type_args: node
                .field("type_arguments")
                .map(|args| named_children(&args).iter().map(lower).collect())
                .unwrap_or_default(),
            args: node
                .field("arguments")
                .map(|args| named_children(&args).iter().map(lower).collect())
                .unwrap_or_default(),
        },
        "variadic_argument" => Expr::Spread(boxed(first_named(node), node)),
        "composite_literal" => Expr::Composite {
            ty: node.field("type").map(|t| Box::new(lower(&t))),
            elems: node
                .field("body")
                .map(|body| lower_literal_value(&body))
                .unwrap_or_default(),
        },
        "literal_value" => Expr::Composite {
            ty: None,
            elems: lower_literal_value(node),
        },
        "unary_expression" => match node.field("operator") {
            Some(op) => Expr::Unary {
                op: op.text().to_string(),
                operand: boxed(node.field("operand"), node),
            },
            None => verbatim(node),
        },
        "binary_expression" => match node.field("operator") {
            Some(op) => Expr::Binary {
                op: op.text().to_string(),
                left: boxed(node.field("left"), node),
                right: boxed(node.field("right"), node),
            },
            None => verbatim(node),
        },
        "index_expression" | "type_instantiation_expression" => {
            let children = named_children(node);
            match children.split_first() {
                Some((operand, indices)) if !indices.is_empty() => Expr::Index {
                    operand: Box::new(lower(operand)),
                    indices: indices.iter().map(lower).collect(),
                },
                _ => verbatim(node),
            }
        }
        "type_assertion_expression" => Expr::TypeAssert {
            operand: boxed(node.field("operand"), node),
            ty: node.field("type").map(|t| Box::new(lower(&t))),
        },
        "type_conversion_expression" => Expr::Call {
            func: boxed(node.field("type"), node),
            type_args: Vec::new(),
            args: node.field("operand").map(|o| vec![lower(&o)]).unwrap_or_default(),
        },
        "func_literal" => Expr::FuncLit(lower_sig(node)),
        _ => verbatim(node),
    }
}

fn literal<D: Doc>(node: &Node<D>, kind: LitKind) -> Expr {
    let text = node.text();
    // Raw strings may span lines; signatures never do.
    let text = if text.contains('\n') {
        collapse_whitespace(&text)
    } else {
        text.to_string()
    };
    Expr::BasicLit { kind, text }
}

/// `chan T`, `chan<- T` or `<-chan T`, decided by where the arrow token sits.
fn lower_channel<D: Doc>(node: &Node<D>) -> Expr {
    let tokens: Vec<String> = node
        .children()
        .filter(|c| !c.is_named())
        .map(|c| c.kind().to_string())
        .collect();
    let dir = match tokens.iter().position(|t| t == "<-") {
        Some(0) => ChanDir::Recv,
        Some(_) => ChanDir::Send,
        None => ChanDir::Both,
    };
    let elem = node
        .field("value")
        .or_else(|| named_children(node).into_iter().last());
    Expr::Chan {
        dir,
        elem: boxed(elem, node),
    }
}

/// Parameters and results of any node with `parameters`/`result` fields
/// (function and method declarations, function types, literals, method elems).
pub(super) fn lower_sig<D: Doc>(node: &Node<D>) -> FuncSig {
    let params = node
        .field("parameters")
        .map(|list| lower_params(&list))
        .unwrap_or_default();
    let results = match node.field("result") {
        Some(result) if result.kind().as_ref() == "parameter_list" => lower_params(&result),
        Some(result) => vec![Field::unnamed(lower(&result))],
        None => Vec::new(),
    };
    FuncSig { params, results }
}

fn lower_params<D: Doc>(list: &Node<D>) -> Vec<Field> {
    let mut fields = Vec::new();
    for decl in named_children(list) {
        let variadic = match decl.kind().as_ref() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            _ => continue,
        };
        let names = decl
            .children()
            .filter(|c| c.kind().as_ref() == "identifier")
            .map(|c| c.text().to_string())
            .collect();
        let ty = boxed(decl.field("type"), &decl);
        let ty = if variadic { Expr::Ellipsis(ty) } else { *ty };
        fields.push(Field { names, ty });
    }
    fields
}

/// Struct fields in declaration order. Tags are dropped.
///
/// Embedded fields have no `field_identifier`; an embedded pointer carries a
/// bare `*` token in front of its type.
fn lower_struct_fields<D: Doc>(node: &Node<D>) -> Vec<Field> {
    let Some(list) = node
        .children()
        .find(|c| c.kind().as_ref() == "field_declaration_list")
    else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for decl in named_children(&list) {
        if decl.kind().as_ref() != "field_declaration" {
            continue;
        }
        let names: Vec<String> = decl
            .children()
            .filter(|c| c.kind().as_ref() == "field_identifier")
            .map(|c| c.text().to_string())
            .collect();
        let ty = *boxed(decl.field("type"), &decl);
        let embedded_pointer = names.is_empty() && decl.children().any(|c| c.kind().as_ref() == "*");
        let ty = if embedded_pointer {
            Expr::Pointer(Box::new(ty))
        } else {
            ty
        };
        fields.push(Field { names, ty });
    }
    fields
}

fn lower_interface<D: Doc>(node: &Node<D>) -> Vec<InterfaceElem> {
    named_children(node)
        .iter()
        .map(|elem| match elem.kind().as_ref() {
            "method_elem" | "method_spec" => match elem.field("name") {
                Some(name) => InterfaceElem::Method {
                    name: name.text().to_string(),
                    sig: lower_sig(elem),
                },
                None => InterfaceElem::Embed(verbatim(elem)),
            },
            _ => InterfaceElem::Embed(lower(elem)),
        })
        .collect()
}

fn lower_literal_value<D: Doc>(node: &Node<D>) -> Vec<Element> {
    named_children(node)
        .iter()
        .map(|elem| {
            if elem.kind().as_ref() == "keyed_element" {
                let parts = named_children(elem);
                if let [key, value] = parts.as_slice() {
                    return Element {
                        key: Some(lower(key)),
                        value: lower(value),
                    };
                }
            }
            Element {
                key: None,
                value: lower(elem),
            }
        })
        .collect()
}
