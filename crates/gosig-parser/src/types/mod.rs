//! Core data types: the lowered Go syntax, classified declarations and
//! rendered signatures.

mod declaration;
mod expr;
mod signature;
mod visibility;

pub use declaration::{
    Declaration, FunctionDecl, SourcePos, TypeDecl, ValueGroup, ValueKeyword, ValueName, ValueSpec,
};
pub use expr::{ChanDir, Element, Expr, Field, FuncSig, InterfaceElem, LitKind};
pub use signature::{RenderedSignature, SignatureKind};
pub use visibility::Visibility;
