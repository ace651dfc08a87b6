//! # gosig-parser
//!
//! ast-grep-based extraction of top-level Go declarations, rendered as
//! one-line signatures.
//!
//! Pipeline, per file:
//! - **parse**: tree-sitter Go grammar via `ast-grep-language`; trees with
//!   error or missing nodes are rejected as syntax errors
//! - **classify**: direct children of the file become functions, types and
//!   `var`/`const` groups, lowered into an owned [`types::Expr`] tree
//! - **format**: visibility filter, type inference and value truncation
//!   driven by a read-only [`gosig_config::FormatConfig`]
//!
//! Output is ordered by source position within the file.

pub mod error;
pub mod extractor;
pub mod parser;
pub mod processor;
pub mod types;

pub use error::{FileError, ParserError};
pub use extractor::{declarations, extract, infer, render};
pub use parser::{parse_go, parse_source};
pub use processor::{format_line, process_file, process_source};
pub use types::{RenderedSignature, SignatureKind, SourcePos, Visibility};
