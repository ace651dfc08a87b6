//! Expression renderer: [`Expr`] → single-line Go source text.
//!
//! Total over every variant; nothing here can fail.

use crate::types::{ChanDir, Element, Expr, Field, FuncSig, InterfaceElem};

/// Render a type or value expression.
#[must_use]
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::BasicLit { text, .. } | Expr::Verbatim(text) => text.clone(),
        Expr::Qualified { package, name } => format!("{package}.{name}"),
        Expr::Selector { operand, field } => format!("{}.{field}", render(operand)),
        Expr::Pointer(inner) => format!("*{}", render(inner)),
        Expr::Slice(elem) => format!("[]{}", render(elem)),
        Expr::Array { len, elem } => match len {
            Some(len) => format!("[{}]{}", render(len), render(elem)),
            None => format!("[...]{}", render(elem)),
        },
        Expr::Map { key, value } => format!("map[{}]{}", render(key), render(value)),
        Expr::Chan { dir, elem } => match dir {
            ChanDir::Both => format!("chan {}", render(elem)),
            ChanDir::Send => format!("chan<- {}", render(elem)),
            ChanDir::Recv => format!("<-chan {}", render(elem)),
        },
        Expr::Func(sig) => format!("func{}", render_sig(sig)),
        Expr::Struct(fields) => render_struct(fields),
        Expr::Interface(elems) => render_interface(elems),
        Expr::Generic { base, args } => format!("{}[{}]", render(base), join(args)),
        Expr::Union(terms) => terms.iter().map(render).collect::<Vec<_>>().join(" | "),
        Expr::Approx(inner) => format!("~{}", render(inner)),
        Expr::Ellipsis(inner) => format!("...{}", render(inner)),
        Expr::Spread(inner) => format!("{}...", render(inner)),
        Expr::Paren(inner) => format!("({})", render(inner)),
        Expr::Call {
            func,
            type_args,
            args,
        } => {
            if type_args.is_empty() {
                format!("{}({})", render(func), join(args))
            } else {
                format!("{}[{}]({})", render(func), join(type_args), join(args))
            }
        }
        Expr::Composite { ty, elems } => {
            let ty = ty.as_deref().map(render).unwrap_or_default();
            format!("{ty}{{{}}}", render_elements(elems))
        }
        Expr::Unary { op, operand } => format!("{op}{}", render(operand)),
        Expr::Binary { op, left, right } => {
            format!("{} {op} {}", render(left), render(right))
        }
        Expr::Index { operand, indices } => format!("{}[{}]", render(operand), join(indices)),
        Expr::TypeAssert { operand, ty } => match ty {
            Some(ty) => format!("{}.({})", render(operand), render(ty)),
            None => format!("{}.(type)", render(operand)),
        },
        Expr::FuncLit(sig) => format!("func{} {{...}}", render_sig(sig)),
    }
}

/// `(a int, b string) (int, error)`: the part of a function after its name.
///
/// Grouped names are expanded one per name. A single unnamed result is bare;
/// several results or named results are parenthesized.
#[must_use]
pub fn render_sig(sig: &FuncSig) -> String {
    let params = render_fields_expanded(&sig.params);
    let mut out = format!("({params})");

    match sig.results.as_slice() {
        [] => {}
        [single] if single.is_embedded() => {
            out.push(' ');
            out.push_str(&render(strip_paren_pointer(&single.ty)));
        }
        results => {
            out.push_str(" (");
            out.push_str(&render_fields_expanded(results));
            out.push(')');
        }
    }
    out
}

/// `(*T)` → `*T`. Other parenthesized types are left alone.
fn strip_paren_pointer(ty: &Expr) -> &Expr {
    match ty {
        Expr::Paren(inner) if matches!(**inner, Expr::Pointer(_)) => inner.as_ref(),
        other => other,
    }
}

fn render_fields_expanded(fields: &[Field]) -> String {
    let mut parts = Vec::with_capacity(fields.len());
    for field in fields {
        let ty = render(strip_paren_pointer(&field.ty));
        if field.names.is_empty() {
            parts.push(ty);
        } else {
            parts.extend(field.names.iter().map(|name| format!("{name} {ty}")));
        }
    }
    parts.join(", ")
}

fn render_struct(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "struct{}".to_string();
    }
    let members: Vec<String> = fields
        .iter()
        .map(|field| {
            let ty = render(&field.ty);
            if field.is_embedded() {
                ty
            } else {
                format!("{} {ty}", field.names.join(", "))
            }
        })
        .collect();
    format!("struct {{ {} }}", members.join("; "))
}

fn render_interface(elems: &[InterfaceElem]) -> String {
    if elems.is_empty() {
        return "interface{}".to_string();
    }
    let members: Vec<String> = elems
        .iter()
        .map(|elem| match elem {
            InterfaceElem::Method { name, sig } => format!("{name}{}", render_sig(sig)),
            InterfaceElem::Embed(ty) => render(ty),
        })
        .collect();
    format!("interface {{ {} }}", members.join("; "))
}

fn render_elements(elems: &[Element]) -> String {
    elems
        .iter()
        .map(|elem| match &elem.key {
            Some(key) => format!("{}: {}", render(key), render(&elem.value)),
            None => render(&elem.value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn join(exprs: &[Expr]) -> String {
    exprs.iter().map(render).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LitKind;
    use pretty_assertions::assert_eq;

    fn id(name: &str) -> Expr {
        Expr::ident(name)
    }

    fn named(name: &str, ty: Expr) -> Field {
        Field {
            names: vec![name.to_string()],
            ty,
        }
    }

    #[test]
    fn channels_render_with_direction() {
        let chan = |dir| Expr::Chan {
            dir,
            elem: Box::new(id("int")),
        };
        assert_eq!(render(&chan(ChanDir::Both)), "chan int");
        assert_eq!(render(&chan(ChanDir::Send)), "chan<- int");
        assert_eq!(render(&chan(ChanDir::Recv)), "<-chan int");
    }

    #[test]
    fn implicit_length_array() {
        let arr = Expr::Array {
            len: None,
            elem: Box::new(id("string")),
        };
        assert_eq!(render(&arr), "[...]string");
    }

    #[test]
    fn single_unnamed_result_is_bare() {
        let sig = FuncSig {
            params: vec![named("a", id("string"))],
            results: vec![Field::unnamed(id("int"))],
        };
        assert_eq!(render_sig(&sig), "(a string) int");
    }

    #[test]
    fn named_result_is_parenthesized() {
        let sig = FuncSig {
            params: Vec::new(),
            results: vec![named("err", id("error"))],
        };
        assert_eq!(render_sig(&sig), "() (err error)");
    }

    #[test]
    fn parenthesized_pointer_result_is_unwrapped() {
        let sig = FuncSig {
            params: Vec::new(),
            results: vec![Field::unnamed(Expr::Paren(Box::new(Expr::Pointer(
                Box::new(id("T")),
            ))))],
        };
        assert_eq!(render_sig(&sig), "() *T");
    }

    #[test]
    fn grouped_params_are_expanded() {
        let sig = FuncSig {
            params: vec![Field {
                names: vec!["x".into(), "y".into()],
                ty: id("float64"),
            }],
            results: Vec::new(),
        };
        assert_eq!(render_sig(&sig), "(x float64, y float64)");
    }

    #[test]
    fn empty_bodies() {
        assert_eq!(render(&Expr::Struct(Vec::new())), "struct{}");
        assert_eq!(render(&Expr::Interface(Vec::new())), "interface{}");
    }

    #[test]
    fn func_literal_body_is_elided() {
        let lit = Expr::FuncLit(FuncSig {
            params: vec![named("s", id("string"))],
            results: vec![Field::unnamed(id("bool"))],
        });
        assert_eq!(render(&lit), "func(s string) bool {...}");
    }

    #[test]
    fn composite_with_keys() {
        let lit = Expr::Composite {
            ty: Some(Box::new(id("Point"))),
            elems: vec![
                Element {
                    key: Some(id("X")),
                    value: Expr::BasicLit {
                        kind: LitKind::Int,
                        text: "1".into(),
                    },
                },
                Element {
                    key: None,
                    value: id("y"),
                },
            ],
        };
        assert_eq!(render(&lit), "Point{X: 1, y}");
    }
}
