//! Signature rendering options.

use serde::{Deserialize, Serialize};

/// Default truncation threshold for rendered values, in characters.
const fn default_max_value_length() -> usize {
    30
}

const fn default_include_values() -> bool {
    true
}

/// Options read by every rendering stage. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Include unexported (lowercase) declarations.
    #[serde(default)]
    pub include_private: bool,

    /// Render the right-hand side of `var`/`const` declarations.
    #[serde(default = "default_include_values")]
    pub include_values: bool,

    /// Values longer than this many characters are cut and suffixed with `...`.
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,
}

impl FormatConfig {
    /// Whether a declaration with the given export status should be emitted.
    #[must_use]
    pub const fn admits(&self, exported: bool) -> bool {
        exported || self.include_private
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            include_private: false,
            include_values: default_include_values(),
            max_value_length: default_max_value_length(),
        }
    }
}
