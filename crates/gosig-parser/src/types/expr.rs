//! Owned Go type and value syntax.
//!
//! Lowered from the tree-sitter tree once per declaration so the renderer and
//! the type inferencer can match exhaustively instead of switching on node
//! kind strings. Anything the lowering does not model becomes
//! [`Expr::Verbatim`] holding whitespace-collapsed source text.

/// Literal token kinds that carry an inferable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imaginary,
    Rune,
    String,
}

/// Channel direction as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifiers, type names and predeclared names (`nil`, `true`, `iota`).
    Ident(String),
    BasicLit { kind: LitKind, text: String },
    /// `pkg.Name` in type position.
    Qualified { package: String, name: String },
    /// `x.f` in value position.
    Selector { operand: Box<Self>, field: String },
    Pointer(Box<Self>),
    Slice(Box<Self>),
    /// `[N]T`; a `None` length is the `[...]T` form of composite literals.
    Array {
        len: Option<Box<Self>>,
        elem: Box<Self>,
    },
    Map { key: Box<Self>, value: Box<Self> },
    Chan { dir: ChanDir, elem: Box<Self> },
    Func(FuncSig),
    Struct(Vec<Field>),
    Interface(Vec<InterfaceElem>),
    /// `List[int]`, `Pair[K, V]`
    Generic { base: Box<Self>, args: Vec<Self> },
    /// `~int | ~string` constraint elements.
    Union(Vec<Self>),
    /// `~T`
    Approx(Box<Self>),
    /// `...T` in variadic parameters.
    Ellipsis(Box<Self>),
    /// `xs...` in call arguments.
    Spread(Box<Self>),
    Paren(Box<Self>),
    Call {
        func: Box<Self>,
        type_args: Vec<Self>,
        args: Vec<Self>,
    },
    /// `T{...}`; untyped nested literals (`{1, 2}` inside `[][]int{...}`) have no type.
    Composite {
        ty: Option<Box<Self>>,
        elems: Vec<Element>,
    },
    Unary { op: String, operand: Box<Self> },
    Binary {
        op: String,
        left: Box<Self>,
        right: Box<Self>,
    },
    Index { operand: Box<Self>, indices: Vec<Self> },
    /// `x.(T)`; `None` is the `x.(type)` switch form.
    TypeAssert {
        operand: Box<Self>,
        ty: Option<Box<Self>>,
    },
    FuncLit(FuncSig),
    Verbatim(String),
}

impl Expr {
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Whether `iota` appears anywhere inside this expression.
    #[must_use]
    pub fn mentions_iota(&self) -> bool {
        match self {
            Self::Ident(name) => name == "iota",
            Self::Paren(inner)
            | Self::Pointer(inner)
            | Self::Approx(inner)
            | Self::Ellipsis(inner)
            | Self::Spread(inner)
            | Self::Unary { operand: inner, .. }
            | Self::Selector { operand: inner, .. } => inner.mentions_iota(),
            Self::Binary { left, right, .. } => left.mentions_iota() || right.mentions_iota(),
            Self::Call { args, .. } => args.iter().any(Self::mentions_iota),
            Self::Index { operand, indices } => {
                operand.mentions_iota() || indices.iter().any(Self::mentions_iota)
            }
            Self::BasicLit { .. }
            | Self::Qualified { .. }
            | Self::Slice(_)
            | Self::Array { .. }
            | Self::Map { .. }
            | Self::Chan { .. }
            | Self::Func(_)
            | Self::Struct(_)
            | Self::Interface(_)
            | Self::Generic { .. }
            | Self::Union(_)
            | Self::Composite { .. }
            | Self::TypeAssert { .. }
            | Self::FuncLit(_)
            | Self::Verbatim(_) => false,
        }
    }
}

/// A struct field, function parameter or result.
///
/// `names` is empty for embedded struct fields and unnamed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: Expr,
}

impl Field {
    #[must_use]
    pub const fn unnamed(ty: Expr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// Parameters and results of a function, method or function type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncSig {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceElem {
    Method { name: String, sig: FuncSig },
    /// Embedded interface or constraint element (`io.Reader`, `~int | ~uint`).
    Embed(Expr),
}

/// One element of a composite literal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub key: Option<Expr>,
    pub value: Expr,
}
