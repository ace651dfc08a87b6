use serde::{Deserialize, Serialize};

use super::declaration::SourcePos;

/// What kind of declaration a signature line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Function,
    Method,
    Type,
    Var,
    Const,
}

/// A one-line signature and the position it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSignature {
    pub position: SourcePos,
    pub kind: SignatureKind,
    pub name: String,
    pub text: String,
}

impl std::fmt::Display for RenderedSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
