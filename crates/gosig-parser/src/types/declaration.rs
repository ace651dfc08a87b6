//! Classified top-level declarations.

use serde::{Deserialize, Serialize};

use super::expr::{Expr, FuncSig};
use super::visibility::Visibility;

/// Location of a node in the source file.
///
/// Ordering is by byte offset (the first field); `line` and `column` are
/// 1-based and only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionDecl),
    Type(TypeDecl),
    Value(ValueGroup),
}

impl Declaration {
    /// Start of the declaration; type specs use their name.
    #[must_use]
    pub const fn position(&self) -> SourcePos {
        match self {
            Self::Function(f) => f.position,
            Self::Type(t) => t.position,
            Self::Value(v) => v.position,
        }
    }
}

/// `func Name(...)` or `func (r *T) Name(...)`. The receiver is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub position: SourcePos,
    pub visibility: Visibility,
    pub has_receiver: bool,
    pub sig: FuncSig,
}

/// One `type` spec. Grouped `type ( ... )` blocks yield one `TypeDecl` per spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub position: SourcePos,
    pub visibility: Visibility,
    /// `type A = B`
    pub alias: bool,
    pub ty: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKeyword {
    Var,
    Const,
}

/// A `var` or `const` statement, grouped or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub keyword: ValueKeyword,
    pub position: SourcePos,
    pub specs: Vec<ValueSpec>,
}

/// One line of a value group: `a, b T = 1, 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<ValueName>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueName {
    pub name: String,
    pub position: SourcePos,
    pub visibility: Visibility,
}
