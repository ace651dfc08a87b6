//! Best-effort type inference for unannotated `var`/`const` values.
//!
//! An empty string means "no idea"; callers omit the type in that case.

use super::render::render;
use crate::types::{Expr, LitKind};

/// Units exported by the `time` package that are `time.Duration` constants.
const DURATION_UNITS: &[&str] = &[
    "Nanosecond",
    "Microsecond",
    "Millisecond",
    "Second",
    "Minute",
    "Hour",
];

const PREDECLARED_TYPES: &[&str] = &[
    "bool",
    "byte",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "any",
];

const COMPARISON_OPS: &[&str] = &["==", "!=", "<", "<=", ">", ">=", "&&", "||"];

/// Infer the type label of a value expression.
#[must_use]
pub fn infer(value: &Expr) -> String {
    match value {
        Expr::BasicLit { kind, .. } => match kind {
            LitKind::Int => "int",
            LitKind::Float => "float64",
            LitKind::Imaginary => "complex128",
            LitKind::Rune => "rune",
            LitKind::String => "string",
        }
        .to_string(),
        Expr::Ident(name) => match name.as_str() {
            "true" | "false" => "bool".to_string(),
            "iota" => "int".to_string(),
            _ => String::new(),
        },
        Expr::Qualified { package, name } => qualified(package, name),
        Expr::Selector { operand, field } => match operand.as_ref() {
            Expr::Ident(package) => qualified(package, field),
            _ => String::new(),
        },
        Expr::Call { func, args, .. } => infer_call(func, args),
        Expr::Composite { ty, elems } => match ty.as_deref() {
            // `[...]T{a, b}` has type `[2]T`; keyed elements leave the length unknown.
            Some(Expr::Array { len: None, elem }) => {
                if elems.iter().any(|e| e.key.is_some()) {
                    String::new()
                } else {
                    format!("[{}]{}", elems.len(), render(elem))
                }
            }
            Some(ty) => render(ty),
            None => String::new(),
        },
        Expr::Unary { op, operand } => {
            let inner = infer(operand);
            match op.as_str() {
                "&" if !inner.is_empty() => format!("*{inner}"),
                "!" => "bool".to_string(),
                "<-" => String::new(),
                _ => inner,
            }
        }
        Expr::Binary { op, left, right } => {
            if COMPARISON_OPS.contains(&op.as_str()) {
                return "bool".to_string();
            }
            // An untyped constant takes the type of its typed partner, except
            // in shifts where the left operand alone decides.
            let shift = matches!(op.as_str(), "<<" | ">>");
            if !shift && matches!(left.as_ref(), Expr::BasicLit { .. }) {
                let typed = infer(right);
                if !typed.is_empty() && !matches!(right.as_ref(), Expr::BasicLit { .. }) {
                    return typed;
                }
            }
            infer(left)
        }
        Expr::Paren(inner) => infer(inner),
        Expr::FuncLit(sig) => render(&Expr::Func(sig.clone())),
        Expr::Pointer(_)
        | Expr::Slice(_)
        | Expr::Array { .. }
        | Expr::Map { .. }
        | Expr::Chan { .. }
        | Expr::Func(_)
        | Expr::Struct(_)
        | Expr::Interface(_)
        | Expr::Generic { .. }
        | Expr::Union(_)
        | Expr::Approx(_)
        | Expr::Ellipsis(_)
        | Expr::Spread(_)
        | Expr::Index { .. }
        | Expr::TypeAssert { .. }
        | Expr::Verbatim(_) => String::new(),
    }
}

fn qualified(package: &str, name: &str) -> String {
    if package == "time" && DURATION_UNITS.contains(&name) {
        "time.Duration".to_string()
    } else {
        format!("{package}.{name}")
    }
}

fn starts_upper(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn infer_call(func: &Expr, args: &[Expr]) -> String {
    let Expr::Ident(name) = func else {
        return match func {
            // `(*T)(x)` style conversions.
            Expr::Paren(inner) => render(inner),
            // `pkg.T(x)`; a lowercase name is a function call, not a type.
            Expr::Qualified { package, name } if starts_upper(name) => qualified(package, name),
            Expr::Selector { operand, field } if starts_upper(field) => match operand.as_ref() {
                Expr::Ident(package) => qualified(package, field),
                _ => String::new(),
            },
            _ => String::new(),
        };
    };
    match name.as_str() {
        "make" => args.first().map(render).unwrap_or_default(),
        "new" => args
            .first()
            .map(|ty| format!("*{}", render(ty)))
            .unwrap_or_default(),
        "len" | "cap" | "copy" => "int".to_string(),
        predeclared if PREDECLARED_TYPES.contains(&predeclared) => predeclared.to_string(),
        _ => String::new(),
    }
}
