//! Signature formatter: one [`Declaration`] → one or more signature lines.

use gosig_config::FormatConfig;

use super::infer::infer;
use super::render::{render, render_sig};
use crate::types::{
    Declaration, Expr, FunctionDecl, RenderedSignature, SignatureKind, TypeDecl, ValueGroup,
    ValueKeyword, ValueSpec,
};

const ELLIPSIS: &str = "...";

/// Format a declaration, dropping names the visibility filter rejects.
pub(super) fn format_declaration(
    decl: &Declaration,
    config: &FormatConfig,
) -> Vec<RenderedSignature> {
    match decl {
        Declaration::Function(func) => config
            .admits(func.visibility.is_exported())
            .then(|| format_function(func))
            .into_iter()
            .collect(),
        Declaration::Type(ty) => config
            .admits(ty.visibility.is_exported())
            .then(|| format_type(ty))
            .into_iter()
            .collect(),
        Declaration::Value(group) => format_value_group(group, config),
    }
}

pub(super) fn format_function(func: &FunctionDecl) -> RenderedSignature {
    RenderedSignature {
        position: func.position,
        kind: if func.has_receiver {
            SignatureKind::Method
        } else {
            SignatureKind::Function
        },
        name: func.name.clone(),
        text: format!("func {}{}", func.name, render_sig(&func.sig)),
    }
}

pub(super) fn format_type(ty: &TypeDecl) -> RenderedSignature {
    let sep = if ty.alias { " = " } else { " " };
    RenderedSignature {
        position: ty.position,
        kind: SignatureKind::Type,
        name: ty.name.clone(),
        text: format!("type {}{sep}{}", ty.name, render(&ty.ty)),
    }
}

/// Cross-spec memory while walking one value group.
///
/// Rebuilt for every group; `carried_type` is the nearest preceding explicit
/// type and `iota_seen` says whether the most recent spec with values used
/// `iota`. Specs without values repeat that expression, so they leave it as is.
#[derive(Debug, Clone, Copy, Default)]
struct GroupState<'g> {
    carried_type: Option<&'g Expr>,
    iota_seen: bool,
}

impl<'g> GroupState<'g> {
    fn advance(self, spec: &'g ValueSpec) -> Self {
        Self {
            carried_type: spec.ty.as_ref().or(self.carried_type),
            iota_seen: if spec.values.is_empty() {
                self.iota_seen
            } else {
                spec.values.iter().any(Expr::mentions_iota)
            },
        }
    }
}

/// One line per admitted name: `var <name> [<type>] [= <value>]`.
///
/// Constants are rendered with the `var` keyword as well.
pub(super) fn format_value_group(
    group: &ValueGroup,
    config: &FormatConfig,
) -> Vec<RenderedSignature> {
    let kind = match group.keyword {
        ValueKeyword::Var => SignatureKind::Var,
        ValueKeyword::Const => SignatureKind::Const,
    };

    let mut lines = Vec::new();
    group
        .specs
        .iter()
        .enumerate()
        .fold(GroupState::default(), |state, (offset, spec)| {
            for (i, name) in spec.names.iter().enumerate() {
                if !config.admits(name.visibility.is_exported()) {
                    continue;
                }
                let value = spec.values.get(i);
                let ty = type_label(group.keyword, spec, value, state);
                let rendered = if config.include_values {
                    value_text(group.keyword, spec, value, state, offset, config)
                } else {
                    None
                };

                let mut text = format!("var {}", name.name);
                if !ty.is_empty() {
                    text.push(' ');
                    text.push_str(&ty);
                }
                if let Some(rendered) = rendered {
                    text.push_str(" = ");
                    text.push_str(&rendered);
                }
                lines.push(RenderedSignature {
                    position: name.position,
                    kind,
                    name: name.name.clone(),
                    text,
                });
            }
            state.advance(spec)
        });
    lines
}

/// First match wins: explicit type, inferred value type (an `iota` value
/// defers to the carried type), carried type, `int` for an `iota` sequence.
fn type_label(
    keyword: ValueKeyword,
    spec: &ValueSpec,
    value: Option<&Expr>,
    state: GroupState<'_>,
) -> String {
    if let Some(ty) = &spec.ty {
        return render(ty);
    }
    if let Some(value) = value {
        return match state.carried_type {
            Some(carried) if value.mentions_iota() => render(carried),
            _ => infer(value),
        };
    }
    if let Some(carried) = state.carried_type {
        return render(carried);
    }
    if keyword == ValueKeyword::Const && state.iota_seen {
        return "int".to_string();
    }
    String::new()
}

/// The right-hand side, or the synthetic counter for an untyped implicit
/// `iota` continuation.
fn value_text(
    keyword: ValueKeyword,
    spec: &ValueSpec,
    value: Option<&Expr>,
    state: GroupState<'_>,
    offset: usize,
    config: &FormatConfig,
) -> Option<String> {
    if let Some(value) = value {
        return Some(truncate(&render_value(value), config.max_value_length));
    }
    let implicit_counter = keyword == ValueKeyword::Const
        && spec.ty.is_none()
        && state.carried_type.is_none()
        && state.iota_seen;
    implicit_counter.then(|| offset.to_string())
}

/// Map literals are re-rendered as `map[K]V{k: v, ...}` keeping only keyed
/// elements; everything else goes through the expression renderer.
fn render_value(value: &Expr) -> String {
    if let Expr::Composite {
        ty: Some(ty),
        elems,
    } = value
        && let Expr::Map { .. } = ty.as_ref()
    {
        let pairs: Vec<String> = elems
            .iter()
            .filter_map(|elem| {
                elem.key
                    .as_ref()
                    .map(|key| format!("{}: {}", render(key), render(&elem.value)))
            })
            .collect();
        return format!("{}{{{}}}", render(ty), pairs.join(", "));
    }
    render(value)
}

/// Cut to exactly `max` characters plus `...` when longer than `max`.
pub(super) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly10!", 10, "exactly10!")]
    #[case("this is too long", 7, "this is...")]
    #[case("anything", 0, "...")]
    #[case("héllo wörld", 4, "héll...")]
    fn truncate_cuts_on_characters(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate(input, max), expected);
    }

    #[test]
    fn truncated_length_is_max_plus_marker() {
        let long = "x".repeat(100);
        let out = truncate(&long, 30);
        assert_eq!(out.chars().count(), 33);
        assert!(out.ends_with("..."));
    }
}
